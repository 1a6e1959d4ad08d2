/// Screens reachable from the navbar or as the outcome of an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    #[default]
    Home,
    Directory,
    AddIntern,
    /// Post-login landing screen for interns.
    InternHome,
    HrLogin,
    InternLogin,
}

impl Destination {
    /// Destinations listed as navbar links, in display order.
    pub const NAV_LINKS: [Destination; 3] = [
        Destination::Home,
        Destination::Directory,
        Destination::AddIntern,
    ];

    /// Title used in the header and window chrome.
    pub fn label(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Directory => "Interns",
            Destination::AddIntern => "Add Intern",
            Destination::InternHome => "Intern Dashboard",
            Destination::HrLogin => "HR Login",
            Destination::InternLogin => "Intern Login",
        }
    }
}
