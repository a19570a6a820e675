use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["customerId", "amount"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let cents: u32 = rng.gen_range(1..100_000);
        wtr.write_record([
            format!("cust-{}", rng.gen_range(1..=50)),
            format!("{}.{:02}", cents / 100, cents % 100),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
