/// Inputs and last error for one login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    /// Message shown above the form after a refused attempt.
    pub error: Option<String>,
}
