use colored::Colorize;

use crate::{
    Booster,
    Sample,
    SmoteBoost,
    SmoteBoostClassifier,
    RoundReport,

    error::Result,
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const DEFAULT_ROUND: usize = 10;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,DatasetSize,MinorityCount,LearnerWeight,Error,Time\n";

/// Struct `Logger` runs [`SmoteBoost`] and
/// logs the dataset size, the minority count, the learner weight,
/// the weighted error, and the running time of each round.
///
/// Each completed round becomes one line of a CSV file
/// whose header is
/// `Round,DatasetSize,MinorityCount,LearnerWeight,Error,Time`.
/// `Time` is the cumulative running time in milliseconds.
///
/// # Example
/// ```no_run
/// use smoteboost::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let smoteboost = SmoteBoost::init(DecisionStump::init())
///     .n_estimators(20)
///     .random_state(0);
///
/// let mut logger = Logger::new(smoteboost).print_every(5);
/// let f = logger.run(&sample, None, None, "log.csv").unwrap();
/// ```
pub struct Logger<B> {
    smoteboost: SmoteBoost<B>,
    round: usize,
}


impl<B> Logger<B> {
    /// Create a new instance of `Logger`.
    pub fn new(smoteboost: SmoteBoost<B>) -> Self {
        Self { smoteboost, round: DEFAULT_ROUND, }
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `10` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    /// Returns the wrapped [`SmoteBoost`].
    pub fn smoteboost(&self) -> &SmoteBoost<B> {
        &self.smoteboost
    }


    #[inline(always)]
    fn is_silent(&self) -> bool {
        self.round == usize::MAX
    }
}


impl<B> Logger<B>
    where B: Booster,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "DATASET".bold().blue(),
            "MINORITY".bold().blue(),
            "LEARNER".bold().green(),
            "TRAIN".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "SIZE".bold().blue(),
            "COUNT".bold().blue(),
            "WEIGHT".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self, sample: &Sample, minority: Option<i64>) {
        let booster = self.smoteboost.booster();
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        let (n_sample, n_feature) = sample.shape();
        let minority = minority.or_else(|| sample.minority_label())
            .map(|y| y.to_string())
            .unwrap_or_else(|| "None".to_string());
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "# of examples".bold(),
            n_sample.to_string().bold().green(),
            "# of features".bold(),
            n_feature.to_string().bold().green(),
            "Minority label".bold(),
            minority.bold().green(),
        );

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            booster.name().bold().green(),
        );
        if let Some(info) = booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Sampler".bold(),
            "SMOTE".bold().green(),
        );
        println!("{}", info_lines(self.smoteboost.info()));
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run [`SmoteBoost::fit`] with logging.
    /// The arguments after `sample` are passed through to `fit`.
    ///
    /// The CSV file is created before training starts.
    /// If creating it or writing the header fails,
    /// nothing is trained.
    /// A write failure during training stops the CSV trace
    /// but not the training;
    /// once `fit` returns, the first such failure is returned
    /// as [`SmoteBoostError::Io`] and the trained classifier is dropped.
    ///
    /// [`SmoteBoostError::Io`]: crate::SmoteBoostError::Io
    pub fn run<P: AsRef<Path>>(
        &mut self,
        sample: &Sample,
        sample_weight: Option<&[f64]>,
        minority_target: Option<i64>,
        filename: P,
    ) -> Result<SmoteBoostClassifier<B::Hypothesis>>
    {
        let file = File::create(filename)?;
        self.run_with_writer(sample, sample_weight, minority_target, file)
    }


    fn run_with_writer<W: Write>(
        &mut self,
        sample: &Sample,
        sample_weight: Option<&[f64]>,
        minority_target: Option<i64>,
        mut file: W,
    ) -> Result<SmoteBoostClassifier<B::Hypothesis>>
    {
        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        let silent = self.is_silent();
        let every = self.round;
        if !silent {
            self.print_stats(sample, minority_target);
            self.print_log_header();
        }

        // The first write failure, reported after `fit` returns.
        let mut io_error = None;
        let mut last = None;
        let f = self.smoteboost.fit_observed(
            sample,
            sample_weight,
            minority_target,
            |report| {
                if io_error.is_none() {
                    let line = csv_line(report);
                    if let Err(e) = file.write_all(line.as_bytes()) {
                        io_error = Some(e);
                    }
                }

                let round = report.iteration + 1;
                if !silent && every > 0 && round % every == 0 {
                    println!("{} {}", "[LOG]".bold().magenta(), log_line(report));
                }
                last = Some(*report);
            },
        )?;

        if let Some(e) = io_error {
            return Err(e.into());
        }

        if let (false, Some(report)) = (silent, last) {
            println!(
                "{} {}\n",
                "[FIN]".bold().bright_green(),
                log_line(&report),
            );
        }

        Ok(f)
    }
}


/// One row of the CSV trace.
fn csv_line(report: &RoundReport) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        report.iteration + 1,
        report.n_rows,
        report.n_minority,
        report.estimator_weight,
        report.error,
        report.time_ms,
    )
}


fn log_line(report: &RoundReport) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format!("{:>WIDTH$}", report.iteration + 1).red(),
        format!("{:>WIDTH$}", report.n_rows).blue(),
        format!("{:>WIDTH$}", report.n_minority).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", report.estimator_weight).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", report.error).yellow(),
        time_format(report.time_ms).bold().cyan(),
    )
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecisionStump, SmoteBoostError};
    use std::io;

    /// Accepts the first `n_ok` writes, then fails every write.
    struct BrokenAfter {
        n_ok: usize,
        written: Vec<u8>,
    }

    impl Write for BrokenAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.n_ok == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.n_ok -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_during_training_is_returned() {
        let rows = (0..16).map(|i| vec![i as f64]).collect();
        let target = (0..16).map(|i| if i < 12 { 0 } else { 1 }).collect();
        let sample = Sample::from_rows(rows, target).unwrap();

        let smoteboost = SmoteBoost::init(DecisionStump::init())
            .n_samples(2)
            .n_estimators(3)
            .k_neighbors(2)
            .random_state(0);
        let mut logger = Logger::new(smoteboost).print_every(usize::MAX);

        let mut writer = BrokenAfter { n_ok: 1, written: Vec::new() };
        let err = logger
            .run_with_writer(&sample, None, None, &mut writer)
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::Io(_)));
        assert_eq!(writer.written, HEADER.as_bytes());
    }

    #[test]
    fn time_is_formatted_by_scale() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(12_345), " 12.345s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(3_720_000), " 01h 02m");
    }

    #[test]
    fn csv_line_matches_the_header() {
        let report = RoundReport {
            iteration: 2,
            n_rows: 130,
            n_minority: 40,
            estimator_weight: 0.5,
            error: 0.25,
            weight_sum: 1.0,
            time_ms: 7,
        };
        let line = csv_line(&report);
        assert_eq!(line, "3,130,40,0.5,0.25,7\n");
        assert_eq!(
            line.trim_end().split(',').count(),
            HEADER.trim_end().split(',').count(),
        );
    }
}
