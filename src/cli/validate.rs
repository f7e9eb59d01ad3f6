use srvguard::CheckKind;

pub(crate) fn run(args: super::CheckArgs) {
    let data_root = args.data_root().unwrap_or_else(|e| super::fault(&e));
    let config = args.load(data_root);
    let options = args.options();

    let source = srvguard::HttpListing::new(options.timeout);
    let report =
        srvguard::run_checks(&config, &source, &options).unwrap_or_else(|e| super::fault(&e));

    super::finish(&report, &[CheckKind::Maps, CheckKind::Plugins], args.format);
}
