use std::path::PathBuf;

use srvguard::{CheckKind, RunReport};

pub(crate) fn run(args: super::CheckArgs) {
    // The map check never touches the plugin repository, so a missing
    // settings file is not an error here.
    let data_root = args.data_dir.clone().unwrap_or_else(PathBuf::new);
    let config = args.load(data_root);
    let options = args.options();

    let source = srvguard::HttpListing::new(options.timeout);
    let report = RunReport {
        checks: vec![srvguard::check_maps(
            &config,
            &source,
            options.stop_on_first_failure,
        )],
    };

    super::finish(&report, &[CheckKind::Maps], args.format);
}
