use crate::*;

pub fn handle_gate(cli: &Cli) -> anyhow::Result<GateReport> {
    let config = load_gate_config(cli.config.as_deref())?;
    let evidence = EvidencePolicy::from_config(&config)?;
    let scanners = SystemScanners::new(&cli.repo_root, &config.dependency_manifests);
    let event_path = cli.resolved_event_path();

    tracing::debug!(
        repo_root = %cli.repo_root.display(),
        event_path = %event_path.display(),
        "starting governance gate"
    );
    let report = run_gate(&cli.repo_root, &event_path, &config, &evidence, &scanners);
    print_report(&report);
    Ok(report)
}
