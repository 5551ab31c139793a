use std::fmt::Display;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use jyotish_config::EngineSettings;
use jyotish_core::{
    Ayanamsa, Body, CachedEphemeris, CalcFlags, HouseSystem, MeanElementsEphemeris,
    TimedEphemeris,
};
use jyotish_search::{
    DailyWindow, MuhurtaRequest, MuhurtaScanConfig, analyze_aspects, compute_chart,
    compute_chart_with_bodies, compute_varga, compute_vimshottari_dasha,
    dasha_hierarchy_for_birth, dasha_snapshot_at, panchang_for_moment, score_muhurta,
};
use jyotish_time::{CivilDateTime, GeoLocation, Moment};
use jyotish_vedic_base::dasha::{DashaLevel, DashaSystem, MAX_DASHA_LEVEL};
use jyotish_vedic_base::{
    ActivityCategory, Chart, DIVISIONS, Element, Rating, ScoredWindow, division,
};
use tracing_subscriber::EnvFilter;

type CliEphemeris = CachedEphemeris<TimedEphemeris<MeanElementsEphemeris>>;

#[derive(Parser)]
#[command(name = "jyotish", about = "Jyotish time-and-position engine CLI")]
struct Cli {
    /// Settings file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Where and in which offset a local time is read.
#[derive(Args, Clone, Copy)]
struct PlaceArgs {
    /// Latitude in degrees (north positive)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// UTC offset in hours (east positive, IST = 5.5)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    utc_offset: f64,
}

/// Overrides for the zodiac and house settings.
#[derive(Args, Clone, Copy)]
struct ZodiacArgs {
    /// Ayanamsa (lahiri, raman, krishnamurti, fagan_bradley, yukteshwar)
    #[arg(long)]
    ayanamsa: Option<Ayanamsa>,
    /// House system (whole_sign, equal, porphyry)
    #[arg(long)]
    house_system: Option<HouseSystem>,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a local date/time
    Jd {
        /// Local datetime (YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD)
        date: String,
        /// UTC offset in hours
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        utc_offset: f64,
    },
    /// Sidereal chart for a moment and place
    Chart {
        /// Local datetime
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        zodiac: ZodiacArgs,
        /// Include Uranus, Neptune and Pluto
        #[arg(long)]
        outer: bool,
    },
    /// Tithi, nakshatra, yoga, karana and vaar
    Panchang {
        /// Local datetime
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Ayanamsa override
        #[arg(long)]
        ayanamsa: Option<Ayanamsa>,
    },
    /// Dasha timeline from a birth moment
    Dasha {
        /// Dasha system (vimshottari, chara, sthira)
        #[arg(long, default_value = "vimshottari")]
        system: DashaSystem,
        /// Local birth datetime
        #[arg(long)]
        birth_date: String,
        /// Local query datetime for snapshot mode (omit for the full timeline)
        #[arg(long)]
        query_date: Option<String>,
        #[command(flatten)]
        place: PlaceArgs,
        /// Maximum dasha depth (0-4)
        #[arg(long, default_value = "1")]
        max_level: u8,
        /// Ayanamsa override
        #[arg(long)]
        ayanamsa: Option<Ayanamsa>,
    },
    /// Divisional charts
    Varga {
        /// Local datetime
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        zodiac: ZodiacArgs,
        /// Comma-separated division factors (default: all sixteen)
        #[arg(long)]
        divisions: Option<String>,
    },
    /// Best windows for an activity across a date range
    Muhurta {
        /// First local date (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last local date, inclusive (defaults to `from`)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Daily window start, local hours
        #[arg(long, default_value = "6")]
        start_hour: f64,
        /// Daily window end, local hours
        #[arg(long, default_value = "20")]
        end_hour: f64,
        #[command(flatten)]
        place: PlaceArgs,
        /// Activity (category name or free text, e.g. "shop opening")
        #[arg(long, default_value = "general")]
        activity: String,
        /// Lowest acceptable rating (poor, fair, good, excellent)
        #[arg(long)]
        min_rating: Option<Rating>,
        /// Number of ranked windows to show
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Inter-chart aspects and compatibility dimensions
    Aspects {
        /// Local datetime of the first chart
        #[arg(long)]
        date_a: String,
        /// Local datetime of the second chart
        #[arg(long)]
        date_b: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Orb in degrees
        #[arg(long)]
        orb: Option<f64>,
    },
}

fn fail(msg: impl Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> EngineSettings {
    EngineSettings::load_or_default(path).unwrap_or_else(|e| fail(e))
}

fn build_ephemeris(settings: &EngineSettings) -> CliEphemeris {
    let timed = TimedEphemeris::new(MeanElementsEphemeris::new(), settings.ephemeris.timeout())
        .unwrap_or_else(|e| fail(e));
    CachedEphemeris::new(timed, settings.ephemeris.cache_capacity)
}

fn parse_moment(date: &str, place: &PlaceArgs) -> Moment {
    let civil: CivilDateTime = date.parse().unwrap_or_else(|e| fail(e));
    let location = GeoLocation::new(place.lat, place.lon).unwrap_or_else(|e| fail(e));
    Moment::new(civil, location, place.utc_offset).unwrap_or_else(|e| fail(e))
}

fn flags_for(settings: &EngineSettings, ayanamsa: Option<Ayanamsa>) -> CalcFlags {
    CalcFlags::sidereal(ayanamsa.unwrap_or(settings.ayanamsa))
}

fn local_time(jd: f64, utc_offset: f64) -> String {
    CivilDateTime::from_julian_day(jd, utc_offset)
        .map(|c| c.to_string())
        .unwrap_or_else(|_| format!("JD {jd:.4}"))
}

fn parse_divisions(s: Option<&str>) -> Vec<u16> {
    match s {
        None => DIVISIONS.iter().map(|d| d.factor).collect(),
        Some(list) => list
            .split(',')
            .map(|part| {
                let part = part.trim().trim_start_matches(['D', 'd']);
                part.parse::<u16>()
                    .unwrap_or_else(|_| fail(format!("invalid division factor {part:?}")))
            })
            .collect(),
    }
}

fn parse_activity(text: &str) -> ActivityCategory {
    text.parse()
        .unwrap_or_else(|_| ActivityCategory::classify(text))
}

fn print_chart(chart: &Chart) {
    println!(
        "Ascendant: {:.4} deg (sign {}, {})",
        chart.ascendant_deg,
        chart.ascendant_sign(),
        chart.ascendant_rashi().name()
    );
    println!("Houses: {}\n", chart.house_system);
    for p in &chart.positions {
        println!(
            "{:<8} {:>9.4} deg  {:<10} {:>7.4} deg in sign  house {:>2}{}",
            p.body.name(),
            p.longitude_deg,
            p.rashi().name(),
            p.degrees_in_sign,
            p.house,
            if p.retrograde { "  (R)" } else { "" }
        );
    }
}

fn print_element<T>(label: &str, element: &Element<T>, render: impl Fn(&T) -> String) {
    match element {
        Element::Available(v) => println!("{label:<10} {}", render(v)),
        Element::Unavailable { reason } => println!("{label:<10} unavailable ({reason})"),
    }
}

fn print_window(rank: usize, w: &ScoredWindow, utc_offset: f64) {
    println!(
        "{:>3}. {} - {}  score {:>5.1}  {}",
        rank,
        local_time(w.window.start_jd, utc_offset),
        local_time(w.window.end_jd, utc_offset),
        w.score.value,
        w.score.rating
    );
    for reason in &w.score.reasons {
        println!("       - {reason}");
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref());
    let eph = build_ephemeris(&settings);

    match cli.command {
        Commands::Jd { date, utc_offset } => {
            let civil: CivilDateTime = date.parse().unwrap_or_else(|e| fail(e));
            let jd = civil.to_julian_day(utc_offset).unwrap_or_else(|e| fail(e));
            println!("JD {jd:.6}");
            println!("Weekday index {} (0 = Sunday)", civil.weekday());
        }

        Commands::Chart {
            date,
            place,
            zodiac,
            outer,
        } => {
            let moment = parse_moment(&date, &place);
            let flags = flags_for(&settings, zodiac.ayanamsa);
            let system = zodiac.house_system.unwrap_or(settings.house_system);
            let chart = if outer {
                compute_chart_with_bodies(&eph, &moment, &Body::ALL, system, flags)
            } else {
                compute_chart(&eph, &moment, system, flags)
            }
            .unwrap_or_else(|e| fail(e));
            println!("Chart for {} ({}, JD {:.6})\n", date, flags.ayanamsa, chart.jd);
            print_chart(&chart);
        }

        Commands::Panchang {
            date,
            place,
            ayanamsa,
        } => {
            let moment = parse_moment(&date, &place);
            let flags = flags_for(&settings, ayanamsa);
            let p = panchang_for_moment(&eph, &moment, flags).unwrap_or_else(|e| fail(e));
            println!("Panchang for {date}\n");
            print_element("Tithi", &p.tithi, |t| {
                format!(
                    "{} {} ({}, lord {})",
                    t.paksha.name(),
                    t.name,
                    t.number,
                    t.lord
                )
            });
            print_element("Nakshatra", &p.nakshatra, |n| {
                format!("{} pada {} (lord {})", n.name, n.pada, n.lord)
            });
            print_element("Yoga", &p.yoga, |y| {
                format!(
                    "{} ({}, lord {}){}",
                    y.name,
                    y.number,
                    y.lord,
                    if y.is_malefic { " malefic" } else { "" }
                )
            });
            print_element("Karana", &p.karana, |k| format!("{} (lord {})", k.name, k.lord));
            println!(
                "{:<10} {} ({}, lord {})",
                "Vaar",
                p.vaar.name(),
                p.vaar.english_name(),
                p.vaar_lord
            );
        }

        Commands::Dasha {
            system,
            birth_date,
            query_date,
            place,
            max_level,
            ayanamsa,
        } => {
            let birth = parse_moment(&birth_date, &place);
            let flags = flags_for(&settings, ayanamsa);
            let level = max_level.min(MAX_DASHA_LEVEL);
            let offset = place.utc_offset;

            if let Some(q) = query_date {
                let query_jd = parse_moment(&q, &place)
                    .julian_day()
                    .unwrap_or_else(|e| fail(e));
                let snapshot = dasha_snapshot_at(&eph, &birth, system, query_jd, level, flags)
                    .unwrap_or_else(|e| fail(e));
                println!("{} dasha at {q} for birth {birth_date}\n", system.name());
                for period in &snapshot.periods {
                    println!(
                        "{}{}: {} ({} to {})",
                        "  ".repeat(period.level as usize),
                        period.level.name(),
                        period.entity.name(),
                        local_time(period.start_jd, offset),
                        local_time(period.end_jd, offset),
                    );
                }
            } else if system == DashaSystem::Vimshottari && level <= 1 {
                let mds = compute_vimshottari_dasha(&eph, &birth, flags).unwrap_or_else(|e| fail(e));
                println!("Vimshottari dasha for birth {birth_date}\n");
                for md in &mds {
                    println!(
                        "{:<8} {} to {}  ({:.2} years)",
                        md.lord.name(),
                        local_time(md.start_jd, offset),
                        local_time(md.end_jd, offset),
                        md.duration_years()
                    );
                    if level == 1 {
                        for ad in &md.antardashas {
                            println!(
                                "    {:<8} {} to {}",
                                ad.lord.name(),
                                local_time(ad.start_jd, offset),
                                local_time(ad.end_jd, offset)
                            );
                        }
                    }
                }
            } else {
                let h = dasha_hierarchy_for_birth(&eph, &birth, system, level, flags)
                    .unwrap_or_else(|e| fail(e));
                println!(
                    "{} dasha for birth {} ({} levels)\n",
                    system.name(),
                    birth_date,
                    h.levels.len()
                );
                for (idx, periods) in h.levels.iter().enumerate() {
                    let name = DashaLevel::from_u8(idx as u8)
                        .map(|l| l.name())
                        .unwrap_or("Unknown");
                    println!("Level {idx} ({name}): {} periods", periods.len());
                    let shown = periods.len().min(50);
                    for period in &periods[..shown] {
                        println!(
                            "  [{}] {} ({} to {})",
                            period.order,
                            period.entity.name(),
                            local_time(period.start_jd, offset),
                            local_time(period.end_jd, offset),
                        );
                    }
                    if periods.len() > shown {
                        println!("  ... and {} more periods", periods.len() - shown);
                    }
                    println!();
                }
            }
        }

        Commands::Varga {
            date,
            place,
            zodiac,
            divisions,
        } => {
            let moment = parse_moment(&date, &place);
            let flags = flags_for(&settings, zodiac.ayanamsa);
            let system = zodiac.house_system.unwrap_or(settings.house_system);
            let chart = compute_chart(&eph, &moment, system, flags).unwrap_or_else(|e| fail(e));
            let factors = parse_divisions(divisions.as_deref());
            for (factor, result) in compute_varga(&chart, &factors) {
                match (division(factor), result) {
                    (Ok(d), Ok(varga)) => {
                        println!("\n{} {} ({})", d.short_name, d.name, d.significations.join(", "));
                        print_chart(&varga);
                    }
                    (_, Err(e)) | (Err(e), _) => println!("\nD{factor}: {e}"),
                }
            }
        }

        Commands::Muhurta {
            from,
            to,
            start_hour,
            end_hour,
            place,
            activity,
            min_rating,
            max_results,
        } => {
            let location = GeoLocation::new(place.lat, place.lon).unwrap_or_else(|e| fail(e));
            let category = parse_activity(&activity);
            let request = MuhurtaRequest {
                start_date: from,
                end_date: to.unwrap_or(from),
                daily_window: DailyWindow::new(start_hour, end_hour),
                location,
                utc_offset_hours: place.utc_offset,
                category,
            };
            let m = &settings.muhurta;
            let config = MuhurtaScanConfig {
                slot_hours: m.slot_hours,
                alternative_days: m.alternative_days,
                max_results: max_results.unwrap_or(m.max_results),
                min_rating: min_rating.unwrap_or(m.min_rating),
                house_system: settings.house_system,
                flags: settings.calc_flags(),
            };
            let result = score_muhurta(&eph, &request, &config).unwrap_or_else(|e| fail(e));

            println!(
                "Muhurta for {} ({} to {}), {} day(s) scanned\n",
                category,
                request.start_date,
                request.end_date,
                result.days_scanned
            );
            if result.ranked.is_empty() {
                println!("No window rated {} or better.", config.min_rating);
                if let Some(best) = &result.best {
                    println!("Best available:");
                    print_window(1, best, place.utc_offset);
                }
            }
            for (i, w) in result.ranked.iter().enumerate() {
                print_window(i + 1, w, place.utc_offset);
            }
            if result.used_alternatives() {
                println!(
                    "\nSearched {} alternative date(s) after {}.",
                    result.alternative_dates.len(),
                    request.end_date
                );
            }
            if !result.skipped.is_empty() {
                println!("\nSkipped days:");
                for s in &result.skipped {
                    println!("  {}: {}", s.date, s.reason);
                }
            }
        }

        Commands::Aspects {
            date_a,
            date_b,
            place,
            orb,
        } => {
            let flags = settings.calc_flags();
            let system = settings.house_system;
            let a = compute_chart(&eph, &parse_moment(&date_a, &place), system, flags)
                .unwrap_or_else(|e| fail(e));
            let b = compute_chart(&eph, &parse_moment(&date_b, &place), system, flags)
                .unwrap_or_else(|e| fail(e));
            let analysis = analyze_aspects(&a, &b, orb.unwrap_or(settings.aspect_orb_deg))
                .unwrap_or_else(|e| fail(e));
            println!("Aspects (orb {:.1} deg)\n", analysis.orb_deg);
            for x in &analysis.aspects {
                println!(
                    "{:<8} {:<12} {:<8} {:>7.3} deg  strength {:>5.1}",
                    x.body_a.name(),
                    x.kind.name(),
                    x.body_b.name(),
                    x.angle_deg,
                    x.strength
                );
            }
            println!();
            for (dimension, score) in &analysis.dimension_scores {
                println!("{:<14} {:>5.1}", dimension.name(), score);
            }
        }
    }
}
