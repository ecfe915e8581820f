use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mt")]
#[command(about = "MedicoTourism patient portal client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Session token issued by the identity provider
    #[arg(long, global = true, env = "MT_SESSION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Identity id of the signed-in user
    #[arg(long, global = true, env = "MT_USER_ID")]
    pub user_id: Option<String>,

    /// Primary email of the signed-in user
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Display name of the signed-in user
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
