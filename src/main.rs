use ferrite_gd::{run, RegressionConfig};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RegressionConfig::default();
    config.validate()?;
    info!("configuration: {}", serde_json::to_string(&config)?);

    println!("Computing regression coefficients using gradient descent.");
    println!("Dataset size n={}", config.data_size);

    let report = run(&config)?;
    debug!("report: {}", serde_json::to_string(&report)?);

    println!("Gradient descent finished after {} steps with loss={:.3}", report.steps, report.loss);
    println!("Estimated coefficients: a={:.3}, b={:.3}", report.coefs.a, report.coefs.b);
    println!("Elapsed time: {:.3} seconds", report.elapsed_secs);

    Ok(())
}
