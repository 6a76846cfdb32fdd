//! Command-line front-end: argument parsing and dispatch.

use crate::config::Settings;
use crate::functions::{self, FunctionError};
use crate::output::{OutputFormat, Report};
use crate::processing::SiblingOrder;
use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use regex::Regex;

const ENV_HELP: &str = "\
Environment:
  INVERSE_CIDR_ORDER       coarse-to-fine (default) | ascending
  INVERSE_CIDR_OUTPUT      lines (default) | json
  INVERSE_CIDR_LOG_CONFIG  log4rs config file (default log4rs.yml)";

/// Complement of a child prefix inside a parent prefix, as CIDR blocks
#[derive(Parser, Debug)]
#[command(name = "inverse-cidr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true, after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Sibling order: coarse-to-fine or ascending (overrides INVERSE_CIDR_ORDER)
    #[arg(long, global = true)]
    pub order: Option<SiblingOrder>,

    /// Output format: lines or json (overrides INVERSE_CIDR_OUTPUT)
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,
}

impl Cli {
    /// Apply command-line overrides on top of `settings`.
    pub fn settings(&self, settings: Settings) -> Settings {
        Settings {
            sibling_order: self.order.unwrap_or(settings.sibling_order),
            output: self.output.unwrap_or(settings.output),
            ..settings
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blocks of the parent left over once the child is removed
    Inverse { parent: String, child: String },

    /// Parent minus several children; lists may be comma separated
    Exclude {
        parent: String,
        #[arg(required = true, value_parser = parse_cidr_list)]
        children: Vec<CidrList>,
    },

    /// PTR domain name of an IP address
    ReverseDns { ip: String },
}

/// One command-line argument holding one or more CIDRs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrList(pub Vec<String>);

fn parse_cidr_list(arg: &str) -> Result<CidrList, String> {
    let list = split_cidr_list(arg);
    if list.is_empty() {
        return Err(format!("no CIDR found in '{arg}'"));
    }
    Ok(CidrList(list))
}

/// Run a parsed command.
pub fn run(command: &Command, settings: &Settings) -> Result<Report, FunctionError> {
    log::debug!("run({command:?})");
    let report = match command {
        Command::Inverse { parent, child } => Report {
            command: "inverse",
            inputs: vec![parent.clone(), child.clone()],
            results: functions::inverse_cidrs_ordered(parent, child, settings.sibling_order)?,
        },
        Command::Exclude { parent, children } => {
            let children: Vec<&str> = children
                .iter()
                .flat_map(|list| list.0.iter().map(String::as_str))
                .collect();
            let mut inputs = vec![parent.clone()];
            inputs.extend(children.iter().map(|c| c.to_string()));
            Report {
                command: "exclude",
                inputs,
                results: functions::exclude_cidrs(parent, children.as_slice())?,
            }
        }
        Command::ReverseDns { ip } => Report {
            command: "reverse-dns",
            inputs: vec![ip.clone()],
            results: vec![functions::reverse_dns(ip)?],
        },
    };
    log::info!("{} produced {} result(s)", report.command, report.results.len());
    Ok(report)
}

/// Split a list of CIDRs on commas, semicolons and whitespace.
pub fn split_cidr_list(input: &str) -> Vec<String> {
    RE.split(input)
        .map(|s| s.trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\s,;]+").expect("Invalid Regex?");
}
