//! Office Layout CLI
//!
//! Usage:
//!   office-layout [OPTIONS] auto --headcount <N> [--width <W>] [--height <H>]
//!   office-layout [OPTIONS] vm --vcpu <C> --ram <GB> --disk <GB> --net <MBPS>
//!
//! Options:
//!   -c, --config <FILE>  Office configuration file (TOML format)
//!   -l, --lint           Report plan defects on stderr
//!   -d, --debug          Log derived sizes and zones on stderr
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use office_layout::layout::lint;
use office_layout::{
    auto_layout, export_plan, open_plan, plan_for_vm, OfficeConfig, OfficeError, OfficePlan,
    VmSpec,
};

#[derive(Parser)]
#[command(name = "office-layout")]
#[command(about = "Generate zoned isometric offices for virtual machines")]
struct Cli {
    /// Office configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report plan defects on stderr
    #[arg(short, long, global = true)]
    lint: bool,

    /// Log derived sizes and zones on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out an office for a headcount
    Auto {
        #[arg(long)]
        headcount: u32,

        /// Grid width in tiles
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in tiles
        #[arg(long)]
        height: Option<u32>,

        /// Only generate the work zone
        #[arg(long)]
        no_common_areas: bool,

        /// Cells between workstation columns
        #[arg(long)]
        spacing: Option<u32>,
    },
    /// Size and lay out an office from machine resources
    Vm {
        #[arg(long)]
        vcpu: u32,

        /// Memory in GB
        #[arg(long)]
        ram: u32,

        /// Disk in GB
        #[arg(long)]
        disk: u32,

        /// Network bandwidth in Mbps
        #[arg(long)]
        net: u32,

        #[arg(long, default_value_t = 1)]
        headcount: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), OfficeError> {
    let config = match &cli.config {
        Some(path) => OfficeConfig::from_file(path)?,
        None => OfficeConfig::default(),
    };

    let (plan, name) = build_plan(&cli.command, &config);

    if cli.lint {
        for warning in lint::check(&plan) {
            eprintln!("warning: {}", warning);
        }
        let (_, report) = open_plan(&plan, &config.editor);
        if !report.is_clean() {
            eprintln!(
                "warning: {} colliding objects would be rejected by the editor",
                report.rejected.len()
            );
        }
    }

    println!("{}", export_plan(&plan, &name)?);
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_plan(command: &Command, config: &OfficeConfig) -> (OfficePlan, String) {
    match command {
        Command::Auto {
            headcount,
            width,
            height,
            no_common_areas,
            spacing,
        } => {
            let defaults = &config.auto_layout;
            let auto = defaults
                .clone()
                .with_headcount(*headcount)
                .with_grid(
                    width.unwrap_or(defaults.grid_width),
                    height.unwrap_or(defaults.grid_height),
                )
                .with_common_areas(defaults.include_common_areas && !no_common_areas)
                .with_workstation_spacing(spacing.unwrap_or(defaults.workstation_spacing));
            let name = format!("Auto Layout ({} people)", headcount);
            (auto_layout(&auto), name)
        }
        Command::Vm {
            vcpu,
            ram,
            disk,
            net,
            headcount,
        } => {
            let spec = VmSpec::new(*vcpu, *ram, *disk, *net);
            let name = format!("VM Office ({} vCPU, {} GB)", vcpu, ram);
            (plan_for_vm(&spec, *headcount, &config.plan_config()), name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_layout::{AutoLayoutConfig, GridOptions, ZoneKind};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn kinds(plan: &OfficePlan) -> Vec<ZoneKind> {
        plan.zones.iter().map(|z| z.kind).collect()
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["office-layout", "auto", "--headcount", "3", "--lint", "-d"]);
        assert!(cli.lint);
        assert!(cli.debug);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_auto_uses_config_defaults() {
        let config = OfficeConfig::default()
            .with_auto_layout(AutoLayoutConfig::default().with_grid(12, 10));
        let cli = parse(&["office-layout", "auto", "--headcount", "3"]);

        let (plan, name) = build_plan(&cli.command, &config);
        assert_eq!((plan.grid.width, plan.grid.height), (12, 10));
        assert_eq!(plan.headcount, 3);
        assert_eq!(kinds(&plan), vec![ZoneKind::Work, ZoneKind::Rest]);
        assert_eq!(name, "Auto Layout (3 people)");
    }

    #[test]
    fn test_flags_override_config() {
        let config = OfficeConfig::default()
            .with_auto_layout(AutoLayoutConfig::default().with_grid(12, 10));
        let cli = parse(&[
            "office-layout",
            "auto",
            "--headcount",
            "3",
            "--width",
            "16",
            "--no-common-areas",
        ]);

        let (plan, _) = build_plan(&cli.command, &config);
        assert_eq!((plan.grid.width, plan.grid.height), (16, 10));
        assert_eq!(kinds(&plan), vec![ZoneKind::Work]);
    }

    #[test]
    fn test_config_can_disable_common_areas() {
        let config = OfficeConfig::default()
            .with_auto_layout(AutoLayoutConfig::default().with_common_areas(false));
        let cli = parse(&["office-layout", "auto", "--headcount", "6"]);

        let (plan, _) = build_plan(&cli.command, &config);
        assert_eq!(kinds(&plan), vec![ZoneKind::Work]);
    }

    #[test]
    fn test_vm_uses_config_budget() {
        let config =
            OfficeConfig::default().with_grid(GridOptions::default().with_tile_budget(50, 120));
        let cli = parse(&[
            "office-layout",
            "vm",
            "--vcpu",
            "8",
            "--ram",
            "16",
            "--disk",
            "200",
            "--net",
            "1000",
        ]);

        let (plan, name) = build_plan(&cli.command, &config);
        assert!(plan.grid.area() <= 120);
        assert_eq!(plan.headcount, 1);
        assert_eq!(name, "VM Office (8 vCPU, 16 GB)");
    }
}
