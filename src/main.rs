pub mod drivers;
pub mod mes;
pub mod run_data;
pub mod task;

use drivers::mes_demo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // drivers::mes_xz()?;
    mes_demo()?;
    Ok(())
}
