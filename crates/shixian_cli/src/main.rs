mod logging;

use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use shixian_bazi::{
    ALL_BRANCHES, ALL_STEMS, BaziChart, ChartConfig, Gender, Pillar, PillarConfig, ResolveConfig,
    ZiWindow, build_chart, four_pillars, resolve_pillars_to_dates,
};
use shixian_calendar::{
    LunarDate, lunar_month_length, lunar_to_solar, solar_to_lunar, year_solar_terms,
};
use shixian_time::{CivilDate, CivilDateTime, julian_to_solar, solar_month_length};
use tracing::info;

#[derive(Parser)]
#[command(name = "shixian", about = "Chinese calendar and BaZi CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ZiArg {
    /// 00:00-01:00
    Early,
    /// 23:00-24:00
    Late,
    /// 23:00-01:00 across midnight
    Whole,
}

impl From<ZiArg> for ZiWindow {
    fn from(z: ZiArg) -> Self {
        match z {
            ZiArg::Early => ZiWindow::Early,
            ZiArg::Late => ZiWindow::Late,
            ZiArg::Whole => ZiWindow::Whole,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Date of a civil date-time
    ToJulian {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, allow_hyphen_values = true)]
        date: CivilDate,
        /// Time of day (hh:mm[:ss])
        #[arg(long, value_parser = parse_time, default_value = "12:00")]
        time: (u32, u32, u32),
    },
    /// Civil date-time of a Julian Date
    FromJulian {
        /// Julian Date
        #[arg(long)]
        jd: f64,
    },
    /// Days in a civil month
    MonthLength {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
    },
    /// Lunar date of a civil date
    ToLunar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, allow_hyphen_values = true)]
        date: CivilDate,
    },
    /// Civil date of a lunar date
    ToSolar {
        /// Lunar year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u32,
        /// Day of the lunar month (1-30)
        #[arg(long)]
        day: u32,
        /// Intercalary month
        #[arg(long)]
        leap: bool,
    },
    /// Days in a lunar month (0 if the month does not exist)
    LunarMonthLength {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u32,
        /// Intercalary month
        #[arg(long)]
        leap: bool,
    },
    /// The jie of a year with their civil times
    Terms {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
    },
    /// Four pillars of a civil date-time (UTC+8)
    Pillars {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, allow_hyphen_values = true)]
        date: CivilDate,
        /// Time of day (hh:mm[:ss])
        #[arg(long, value_parser = parse_time)]
        time: (u32, u32, u32),
        /// Keep 23:00-24:00 on the current day's pillar
        #[arg(long)]
        split_zi: bool,
    },
    /// Full chart with luck pillars
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, allow_hyphen_values = true)]
        date: CivilDate,
        /// Birth time (hh:mm[:ss])
        #[arg(long, value_parser = parse_time)]
        time: (u32, u32, u32),
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Keep 23:00-24:00 on the current day's pillar
        #[arg(long)]
        split_zi: bool,
    },
    /// Civil time windows matching four pillars
    Resolve {
        /// Year pillar (e.g. 庚午 or cycle index 0-59)
        #[arg(long, value_parser = parse_pillar)]
        year: Pillar,
        /// Month pillar
        #[arg(long, value_parser = parse_pillar)]
        month: Pillar,
        /// Day pillar
        #[arg(long, value_parser = parse_pillar)]
        day: Pillar,
        /// Hour pillar
        #[arg(long, value_parser = parse_pillar)]
        hour: Pillar,
        /// Span searched for a 子 hour pillar
        #[arg(long, value_enum, default_value_t = ZiArg::Early)]
        zi: ZiArg,
        /// First year searched
        #[arg(long, default_value = "1500")]
        base_year: i32,
        /// Number of 60-year cycles searched
        #[arg(long, default_value = "17")]
        cycles: u32,
    },
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    // A leading '-' belongs to the year.
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
    Ok(CivilDate::new(sign * year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("expected hh:mm[:ss], got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("hour: {e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("minute: {e}"))?;
    let second: u32 = match parts.get(2) {
        Some(p) => p.parse().map_err(|e| format!("second: {e}"))?,
        None => 0,
    };
    Ok((hour, minute, second))
}

fn parse_pillar(s: &str) -> Result<Pillar, String> {
    if let Ok(cycle) = s.parse::<u8>() {
        if cycle >= 60 {
            return Err(format!("cycle index {cycle} out of range (0-59)"));
        }
        return Ok(Pillar::new(i64::from(cycle)));
    }
    let chars: Vec<char> = s.chars().collect();
    let &[s_char, b_char] = chars.as_slice() else {
        return Err(format!("expected a stem and a branch, got {s}"));
    };
    let stem = ALL_STEMS
        .into_iter()
        .find(|x| x.name().starts_with(s_char))
        .ok_or_else(|| format!("unknown stem {s_char}"))?;
    let branch = ALL_BRANCHES
        .into_iter()
        .find(|x| x.name().starts_with(b_char))
        .ok_or_else(|| format!("unknown branch {b_char}"))?;
    Pillar::from_stem_branch(stem, branch).ok_or_else(|| format!("{s} is not a sexagenary pillar"))
}

fn print_chart(chart: &BaziChart) {
    let p = &chart.pillars;
    println!("Birth:     {} ({:?})", chart.birth, chart.gender);
    println!("Pillars:   {} {} {} {}", p.year, p.month, p.day, p.hour);
    println!("Front jie: {} {}", chart.front.jie, chart.front.time);
    println!("Back jie:  {} {}", chart.back.jie, chart.back.time);
    println!("Direction: {:?}", chart.direction);

    let primary = &chart.primary;
    println!();
    println!(
        "Onset after {:.4} days of span: {}",
        primary.span_days, primary.age
    );
    for (pillar, onset) in primary.luck_pillars.iter().zip(&primary.onsets) {
        println!("  {pillar}  {onset}");
    }

    let alt = &chart.alternate;
    println!();
    let onset = alt
        .onset
        .map_or_else(|| "beyond calendar range".to_string(), |d| d.to_string());
    println!(
        "Alternate onset: {} days -> {} years, lunar {} = {onset}",
        alt.span_days, alt.age_years, alt.lunar_onset
    );
    for marker in &alt.markers {
        println!("  {marker}");
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::ToJulian {
            date,
            time: (h, m, s),
        } => {
            let jd = date.at(h, m, s).to_julian()?;
            println!("{jd:.6}");
        }

        Commands::FromJulian { jd } => {
            println!("{}", julian_to_solar(jd));
        }

        Commands::MonthLength { year, month } => {
            println!("{}", solar_month_length(year, month));
        }

        Commands::ToLunar { date } => {
            println!("{}", solar_to_lunar(date)?);
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            println!("{}", lunar_to_solar(LunarDate::new(year, month, day, leap))?);
        }

        Commands::LunarMonthLength { year, month, leap } => {
            println!("{}", lunar_month_length(year, month, leap));
        }

        Commands::Terms { year } => {
            for record in year_solar_terms(year)? {
                println!("{}  {}", record.jie, record.time);
            }
        }

        Commands::Pillars {
            date,
            time: (h, m, s),
            split_zi,
        } => {
            let p = four_pillars(&date.at(h, m, s), &PillarConfig::new(split_zi))?;
            println!("{} {} {} {}", p.year, p.month, p.day, p.hour);
        }

        Commands::Chart {
            date,
            time: (h, m, s),
            gender,
            split_zi,
        } => {
            let birth: CivilDateTime = date.at(h, m, s);
            let config = ChartConfig::new(PillarConfig::new(split_zi));
            print_chart(&build_chart(gender.into(), &birth, &config)?);
        }

        Commands::Resolve {
            year,
            month,
            day,
            hour,
            zi,
            base_year,
            cycles,
        } => {
            let config = ResolveConfig {
                zi: zi.into(),
                base_year,
                cycle_count: cycles,
            };
            let windows = resolve_pillars_to_dates(year, month, day, hour, &config)?;
            info!(count = windows.len(), "resolved windows");
            for w in &windows {
                println!("{} - {}", w.start, w.end);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
