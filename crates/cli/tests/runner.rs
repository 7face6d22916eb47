#![forbid(unsafe_code)]

use iperf_outages::error::Error;
use iperf_outages::runner::{RunOptions, run};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const OUTAGE_LOG: &str = "\
Time: Mon, 19 Dec 2022 18:59:15 GMT
[ ID] Interval           Transfer     Bitrate
[  7]   0.00-1.00   sec   592 KBytes  4.85 Mbits/sec
[  7]   1.00-2.00   sec  0.00 Bytes  0.00 bits/sec
[  7]   2.00-3.00   sec  0.00 Bytes  0.00 bits/sec
[  7]   3.00-4.00   sec   592 KBytes  4.85 Mbits/sec
- - - - - - - - - - - - - - - - - - - - - - - - -
";

const CLEAN_LOG: &str = "\
[  7]   0.00-1.00   sec   592 KBytes  4.85 Mbits/sec
[  7]   1.00-2.00   sec   592 KBytes  4.85 Mbits/sec
";

const BROKEN_LOG: &str = "Time: Mon, 45 Dec 2022 18:59:15 GMT\n";

fn options(verbose: bool, fail_fast: bool) -> RunOptions {
    RunOptions {
        verbose,
        precision: 5,
        jobs: 2,
        fail_fast,
    }
}

fn write_logs(logs: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempdir().unwrap();
    let paths = logs
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect();
    (dir, paths)
}

fn name(path: &Path) -> String {
    path.display().to_string()
}

#[tokio::test]
async fn reports_follow_argument_order() {
    let (_dir, paths) = write_logs(&[("a.log", OUTAGE_LOG), ("b.log", CLEAN_LOG)]);
    let mut out = Vec::new();
    let mut err = Vec::new();

    let reported = run(paths.clone(), options(true, false), &mut out, &mut err)
        .await
        .unwrap();

    assert_eq!(reported, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "{}: duration 0:00:04, longest outage 2 secs, total 1 outages lasting 2 secs (50.00000%)\n\
             \x20 * 2022-12-19 18:59:16 UTC, duration 0:00:02 (1.00-3.00)\n\
             {}: duration 0:00:02, 0 outages\n",
            name(&paths[0]),
            name(&paths[1])
        )
    );
    assert!(err.is_empty());
}

#[tokio::test]
async fn failed_file_does_not_stop_the_others() {
    let (dir, mut paths) = write_logs(&[("broken.log", BROKEN_LOG), ("b.log", CLEAN_LOG)]);
    paths.insert(1, dir.path().join("missing.log"));
    let mut out = Vec::new();
    let mut err = Vec::new();

    let res = run(paths.clone(), options(false, false), &mut out, &mut err).await;

    assert!(matches!(res, Err(Error::Incomplete { failed: 2, total: 3 })));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}: duration 0:00:02, 0 outages\n", name(&paths[2]))
    );
    let err = String::from_utf8(err).unwrap();
    assert_eq!(err.lines().count(), 2);
    assert!(err.starts_with(&name(&paths[0])));
}

#[tokio::test]
async fn fail_fast_stops_at_first_failure() {
    let (dir, mut paths) = write_logs(&[("a.log", CLEAN_LOG), ("c.log", CLEAN_LOG)]);
    paths.insert(1, dir.path().join("missing.log"));
    let mut out = Vec::new();
    let mut err = Vec::new();

    let res = run(paths.clone(), options(false, true), &mut out, &mut err).await;

    match res {
        Err(Error::File { path, source }) => {
            assert_eq!(path, paths[1]);
            assert!(matches!(source, analyzer::Error::Io { .. }));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}: duration 0:00:02, 0 outages\n", name(&paths[0]))
    );
}

#[tokio::test]
async fn oversized_jobs_are_capped() {
    let (_dir, paths) = write_logs(&[("a.log", CLEAN_LOG)]);
    let options = RunOptions {
        jobs: usize::MAX,
        ..options(false, false)
    };
    let mut out = Vec::new();
    let mut err = Vec::new();

    assert_eq!(run(paths.clone(), options, &mut out, &mut err).await.unwrap(), 1);
    assert_eq!(run(vec![], options, &mut out, &mut err).await.unwrap(), 0);
}
