use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// Fetch the authoritative role
    Get,
    /// Select a role (patient or doctor)
    Set {
        role: String,
    },
}
