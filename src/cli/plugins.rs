use srvguard::{CheckKind, RunReport};

pub(crate) fn run(args: super::CheckArgs) {
    let data_root = args.data_root().unwrap_or_else(|e| super::fault(&e));
    let config = args.load(data_root);
    let options = args.options();

    let check = srvguard::check_plugins(&config, options.stop_on_first_failure)
        .unwrap_or_else(|e| super::fault(&e));
    let report = RunReport {
        checks: vec![check],
    };

    super::finish(&report, &[CheckKind::Plugins], args.format);
}
