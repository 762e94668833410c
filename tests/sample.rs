use std::io::Write;

use polars::prelude::*;
use smoteboost::prelude::*;
use tempfile::NamedTempFile;


fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}


/// Tests for `Sample` and `SampleReader`.
#[cfg(test)]
pub mod sample_tests {
    use super::*;

    #[test]
    fn read_csv_with_header() {
        let file = csv_file(
            "height,class,width\n\
            1.0,0,2.5\n\
            3.0,1,4.0\n\
            5.5,0,-1.0\n"
        );
        let sample = SampleReader::new()
            .file(file.path())
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.feature_names(), &["height", "width"]);
        assert_eq!(sample.target(), &[0, 1, 0]);
        assert_eq!(sample.at(2), (&[5.5, -1.0][..], 0));
        assert_eq!(sample.minority_label(), Some(1));
    }


    #[test]
    fn read_csv_without_header() {
        let file = csv_file("0.5,1.5,2\n2.5,3.5,-1\n\n");
        let sample = SampleReader::new()
            .file(file.path())
            .target_feature("Feat. [3]")
            .read()
            .unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.feature_names(), &["Feat. [1]", "Feat. [2]"]);
        assert_eq!(sample.target(), &[2, -1]);
    }


    #[test]
    fn unknown_target_column() {
        let file = csv_file("a,b\n1,0\n");
        let err = SampleReader::new()
            .file(file.path())
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::InvalidParameter { .. }));
    }


    #[test]
    fn malformed_values_are_parse_errors() {
        let file = csv_file("a,class\n1.0,0\nabc,1\n");
        let err = SampleReader::new()
            .file(file.path())
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::Parse { line: 3, .. }));

        let file = csv_file("a,class\n1.0,0.5\n");
        let err = SampleReader::new()
            .file(file.path())
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::Parse { .. }));
    }


    #[test]
    fn bad_label_reports_its_own_line() {
        // Line 3 is blank; the bad label sits on line 4.
        let file = csv_file("a,class\n1.0,0\n\n2.0,0.5\n");
        let err = SampleReader::new()
            .file(file.path())
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::Parse { line: 4, .. }));
    }


    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SampleReader::new()
            .file(dir.path().join("nothing.csv"))
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, SmoteBoostError::Io(_)));
    }


    #[test]
    fn from_dataframe_casts_columns() {
        let data = df!(
            "x" => &[1.0, 2.0, 3.0],
            "n" => &[4i32, 5, 6]
        ).unwrap();
        let target = Series::new("y", &[1i32, 0, 1]);

        let sample = Sample::from_dataframe(data, target).unwrap();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.feature_names(), &["x", "n"]);
        assert_eq!(sample.row(1), &[2.0, 5.0]);
        assert_eq!(sample.target(), &[1, 0, 1]);
        assert_eq!(sample.minority_label(), Some(0));
    }


    #[test]
    fn from_dataframe_rejects_fractional_labels() {
        let data = df!("x" => &[1.0, 2.0, 3.0]).unwrap();
        let target = Series::new("y", &[1.0, 0.5, 1.0]);
        let err = Sample::from_dataframe(data, target).unwrap_err();
        assert!(matches!(err, SmoteBoostError::Parse { line: 2, .. }));

        let data = df!("x" => &[1.0, 2.0, 3.0]).unwrap();
        let target = Series::new("y", &[1.0, 0.0, -1.0]);
        let sample = Sample::from_dataframe(data, target).unwrap();
        assert_eq!(sample.target(), &[1, 0, -1]);
    }


    #[test]
    fn from_dataframe_checks_lengths() {
        let data = df!("x" => &[1.0, 2.0]).unwrap();
        let target = Series::new("y", &[1i64, 0, 1]);
        let err = Sample::from_dataframe(data, target).unwrap_err();
        assert!(matches!(
            err,
            SmoteBoostError::DimensionMismatch { expected: 2, found: 3 }
        ));
    }


    #[test]
    fn empty_rows_are_rejected() {
        let err = Sample::from_rows(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, SmoteBoostError::EmptySample));

        let rows = vec![vec![0.0], vec![1.0]];
        let err = Sample::from_rows(rows, vec![0]).unwrap_err();
        assert!(matches!(err, SmoteBoostError::DimensionMismatch { .. }));
    }
}
