use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum IntakeCommands {
    /// Fetch the stored intake record
    Get,
    /// Submit the intake form
    Submit(IntakeArgs),
}

#[derive(Args, Debug, Default)]
pub struct IntakeArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub age: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub budget: String,
    /// Interested in sightseeing
    #[arg(long)]
    pub sightseeing: bool,
    /// Days of sightseeing (1-30), used only with --sightseeing
    #[arg(long, default_value = "")]
    pub sightseeing_days: String,
    /// Sightseeing preference; repeatable
    #[arg(long = "pref")]
    pub prefs: Vec<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
}
