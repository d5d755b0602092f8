use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
taglex is a small harness for exercising the taglex tag search engine from
the command line: create a database, load it from a CSV file of tags, and
run ranked prefix/subsequence queries against it.

This binary is a worked example, not a specified interface; real hosts talk
to taglex-core directly through its Rust API.";

const ABOUT_QUERY: &'static str = "\
query loads a CSV file into a fresh, throwaway database and runs a single
search against it, printing the ranked matches. This is the quickest way to
try a query without juggling handles across separate invocations.
";

const ABOUT_CREATE: &'static str = "\
create allocates a new database and prints its handle. The handle is only
meaningful within a process that keeps the resulting Registry alive;
this command exists for symmetry with the other subcommands and for
scripting against a long-running taglex session.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    let arg_csv = Arg::with_name("csv")
        .required(true)
        .help("Path to a CSV file of word,category,freq,redirect rows.");
    let arg_query = Arg::with_name("query").required(true).help("The search query.");
    let arg_name = Arg::with_name("name")
        .required(true)
        .help("A label for the new database (opaque to the engine).");

    let cmd_create = SubCommand::with_name("create")
        .template(TEMPLATE_SUB)
        .about("Create a database and print its handle.")
        .before_help(ABOUT_CREATE)
        .arg(arg_name);

    let cmd_query = SubCommand::with_name("query")
        .template(TEMPLATE_SUB)
        .about("Load a CSV file and run one search against it.")
        .before_help(ABOUT_QUERY)
        .arg(arg_csv)
        .arg(arg_query);

    App::new("taglex")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(cmd_create)
        .subcommand(cmd_query)
}
