use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum VisitCommands {
    /// List visits (requires a verified profile)
    List,
    /// Request a visit, optionally with medical documents
    Create {
        /// Chief complaint
        #[arg(long)]
        complaint: String,
        /// Document to upload as PATH or PATH=TYPE (prescription, lab_report,
        /// imaging, clinical_notes); repeatable, at most 5
        #[arg(long = "doc")]
        docs: Vec<String>,
    },
}
