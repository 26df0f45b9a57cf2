use repo_provisioner::{Provisioner, ProvisionerConfig};

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = ProvisionerConfig::default();

    // The whole run operates from inside the project checkout.
    if let Err(e) = std::env::set_current_dir(&config.project_dir) {
        println!("❌ Cannot enter {}: {}", config.project_dir.display(), e);
        std::process::exit(1);
    }

    log::info!(
        "Provisioning {} from {}",
        config.repo_name,
        config.project_dir.display()
    );

    let provisioner = Provisioner::new(config);
    if let Err(err) = provisioner.run().await {
        log::debug!("Provisioning aborted: {}", err);
        std::process::exit(1);
    }
}
