use chrono::Utc;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let controller = super::controller()?;
    println!("{}", controller.status(Utc::now()));
    Ok(())
}
