use crate::{
    intake_commands::IntakeCommands, role_commands::RoleCommands, visit_commands::VisitCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a page through the session gate and report where it lands
    Enter {
        /// Page path or name, e.g. /visits/new or new-visit
        page: String,
    },

    /// Create or update the backend user record for the signed-in identity
    Sync,

    /// Role operations
    Role {
        #[command(subcommand)]
        action: RoleCommands,
    },

    /// Submit the extended profile for verification
    Verify {
        /// Full name (defaults to the identity's name)
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        age: String,
        #[arg(long)]
        budget: String,
        #[arg(long)]
        availability_days: String,
        /// indian_citizen, not_indian_citizen or other
        #[arg(long, default_value = "indian_citizen")]
        visa_status: String,
    },

    /// Show whether the signed-in user is verified
    Status,

    /// Visit operations
    Visit {
        #[command(subcommand)]
        action: VisitCommands,
    },

    /// Intake form operations
    Intake {
        #[command(subcommand)]
        action: IntakeCommands,
    },

    /// Intake record and visits in one view
    Profile,
}
