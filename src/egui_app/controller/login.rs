use super::*;

/// Which of the two login screens an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginScreen {
    Hr,
    Intern,
}

impl LoginScreen {
    /// Screen reached after a successful sign-in.
    pub fn destination(self) -> Destination {
        match self {
            LoginScreen::Hr => Destination::HrLogin,
            LoginScreen::Intern => Destination::InternLogin,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LoginScreen::Hr => "HR Login",
            LoginScreen::Intern => "Intern Login",
        }
    }
}

impl EguiController {
    /// Form state backing `screen`.
    pub fn login_form(&self, screen: LoginScreen) -> &LoginFormState {
        match screen {
            LoginScreen::Hr => &self.ui.hr_login,
            LoginScreen::Intern => &self.ui.intern_login,
        }
    }

    pub fn login_form_mut(&mut self, screen: LoginScreen) -> &mut LoginFormState {
        match screen {
            LoginScreen::Hr => &mut self.ui.hr_login,
            LoginScreen::Intern => &mut self.ui.intern_login,
        }
    }

    /// Check the typed credentials and navigate on success.
    pub fn submit_login(&mut self, screen: LoginScreen) -> Result<Destination, AuthRejection> {
        let form = self.login_form(screen);
        let gate = match screen {
            LoginScreen::Hr => &self.hr_gate,
            LoginScreen::Intern => &self.intern_gate,
        };
        match gate.attempt(&form.email, &form.password) {
            Ok(destination) => {
                tracing::info!("{} accepted", screen.title());
                self.navigate(destination);
                self.set_status("Signed in", StatusTone::Info);
                Ok(destination)
            }
            Err(rejection) => {
                tracing::debug!("{} refused: {rejection}", screen.title());
                self.login_form_mut(screen).error = Some(rejection.to_string());
                Err(rejection)
            }
        }
    }
}
