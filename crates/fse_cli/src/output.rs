use std::io::{self, Write};

use console::style;
use fse_core::config::OutputStyle;
use fse_core::ranking::RankedJob;
use fse_core::search::SearchReport;

pub fn print_report<W: Write>(
    report: &SearchReport,
    output: OutputStyle,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", heading(report, output))?;
    for job in &report.jobs {
        writeln!(out, "{}", job_line(job, output))?;
    }
    Ok(())
}

fn heading(report: &SearchReport, output: OutputStyle) -> String {
    let count = report.aircraft_count.to_string();
    let count = match output {
        OutputStyle::Plain => count,
        OutputStyle::Decorated => style(count).red().force_styling(true).to_string(),
    };
    format!("Found {} Aircrafts of type {}", count, report.aircraft_type)
}

fn job_line(ranked: &RankedJob, output: OutputStyle) -> String {
    let job = &ranked.job;
    let route = format!("{} > {}", job.origin, job.destination);
    let distance = format!("{} NM", ranked.distance_nm);
    let pay = format!("{}$", job.pay);

    match output {
        OutputStyle::Plain => format!(
            "{route}, {distance} , Expires in: {} , {pay} : {}",
            job.expires, ranked.origin_description
        ),
        OutputStyle::Decorated => format!(
            "{}, {}, Expires in: {} , {} : {}",
            style(route).green().force_styling(true),
            style(distance).yellow().force_styling(true),
            job.expires,
            style(pay).magenta().force_styling(true),
            ranked.origin_description
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fse_core::matching::MatchedJob;

    fn report() -> SearchReport {
        SearchReport {
            aircraft_type: "Cessna 172 Skyhawk".to_string(),
            aircraft_count: 3,
            jobs: vec![RankedJob {
                job: MatchedJob {
                    origin: "KJFK".to_string(),
                    destination: "KLAX".to_string(),
                    pay: 500,
                    expires: "2 days".to_string(),
                },
                distance_nm: 2145,
                origin_description:
                    "KJFK, John F Kennedy International Airport, US, large_airport".to_string(),
            }],
        }
    }

    #[test]
    fn plain_output_matches_classic_layout() {
        let mut out = Vec::new();
        print_report(&report(), OutputStyle::Plain, &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Found 3 Aircrafts of type Cessna 172 Skyhawk\n\
             KJFK > KLAX, 2145 NM , Expires in: 2 days , 500$ : \
             KJFK, John F Kennedy International Airport, US, large_airport\n"
        );
    }

    #[test]
    fn decorated_output_colours_route_distance_and_pay() {
        let line = job_line(&report().jobs[0], OutputStyle::Decorated);
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("KJFK > KLAX"));
        assert!(line.contains("2145 NM"));
        assert!(line.contains("500$"));
        assert!(line.ends_with(": KJFK, John F Kennedy International Airport, US, large_airport"));
    }

    #[test]
    fn empty_report_prints_only_heading() {
        let mut report = report();
        report.jobs.clear();
        let mut out = Vec::new();
        print_report(&report, OutputStyle::Plain, &mut out).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Found 3 Aircrafts of type Cessna 172 Skyhawk\n"
        );
    }
}
