//! Clap command tree (builder API).

use clap::{Arg, ArgAction, Command};

/// Build the full `admissions` command tree.
pub fn build_cli() -> Command {
    Command::new("admissions")
        .about("Application records, status index and admin decisions")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Data directory (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .default_value("admissions.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("as")
                .long("as")
                .global(true)
                .value_name("SUBJECT")
                .help("Caller identity"),
        )
        .arg(
            Arg::new("admin")
                .long("admin")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Act with the admin role"),
        )
        .arg(
            Arg::new("read-only")
                .long("read-only")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Open the database read-only"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .subcommand(
            with_draft_args(Command::new("draft").about("Save application sections as a draft"))
                .arg(applicant_arg()),
        )
        .subcommand(
            Command::new("attach")
                .about("Attach a document reference")
                .arg(
                    Arg::new("type")
                        .required(true)
                        .help("transcript | recommendation | personal_statement | additional"),
                )
                .arg(Arg::new("filename").required(true))
                .arg(
                    Arg::new("location")
                        .long("location")
                        .value_name("URI")
                        .help("Where the document is stored"),
                )
                .arg(applicant_arg()),
        )
        .subcommand(
            with_draft_args(Command::new("submit").about("Submit the application"))
                .arg(applicant_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Show application status")
                .arg(Arg::new("applicant")),
        )
        .subcommand(
            Command::new("show")
                .about("Show the full application")
                .arg(Arg::new("applicant")),
        )
        .subcommand(
            Command::new("list")
                .about("List submitted applications (admin)")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_name("STATUS")
                        .help("Only entries with this status"),
                )
                .arg(
                    Arg::new("counts")
                        .long("counts")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("status")
                        .help("Print entries per status instead"),
                ),
        )
        .subcommand(
            Command::new("decide")
                .about("Record an admission decision (admin)")
                .arg(Arg::new("applicant").required(true))
                .arg(
                    Arg::new("decision")
                        .required(true)
                        .help("under_review | accepted | rejected"),
                )
                .arg(
                    Arg::new("comments")
                        .long("comments")
                        .short('m')
                        .value_name("TEXT"),
                ),
        )
        .subcommand(
            Command::new("note")
                .about("Add a note to a submitted application (admin)")
                .arg(Arg::new("applicant").required(true))
                .arg(Arg::new("content").required(true)),
        )
        .subcommand(
            Command::new("aid")
                .about("Financial aid awards")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .about("Set an award (admin)")
                        .arg(Arg::new("applicant").required(true))
                        .arg(
                            Arg::new("scholarship")
                                .long("scholarship")
                                .value_name("AMOUNT")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("grant")
                                .long("grant")
                                .value_name("AMOUNT")
                                .default_value("0"),
                        ),
                )
                .subcommand(
                    Command::new("get")
                        .about("Show an award")
                        .arg(Arg::new("applicant")),
                ),
        )
        .subcommand(Command::new("roster").about("Submitted applications with awards (admin)"))
        .subcommand(
            Command::new("reconcile").about("Rebuild the index from the records (admin)"),
        )
}

fn applicant_arg() -> Arg {
    Arg::new("applicant")
        .long("applicant")
        .value_name("KEY")
        .help("Applicant key (defaults to --as)")
}

fn with_draft_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("file")
            .long("file")
            .short('f')
            .value_name("FILE")
            .help("Draft sections as JSON; '-' reads stdin"),
    )
    .arg(Arg::new("name").long("name").value_name("FULL NAME"))
    .arg(Arg::new("dob").long("dob").value_name("YYYY-MM-DD"))
    .arg(Arg::new("address").long("address"))
    .arg(Arg::new("email").long("email"))
    .arg(Arg::new("phone").long("phone"))
    .arg(Arg::new("school").long("school").value_name("HIGH SCHOOL"))
    .arg(Arg::new("gpa").long("gpa"))
    .arg(Arg::new("sat").long("sat").value_name("SCORE"))
    .arg(Arg::new("grad-year").long("grad-year").value_name("YEAR"))
    .arg(Arg::new("essay").long("essay").value_name("TEXT"))
}
