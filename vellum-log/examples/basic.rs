#![expect(missing_docs, reason = "example")]

use vellum_log::DebugLog;
use vellum_vfs_std::DirVolume;

fn main() {
    let directory = std::env::temp_dir();
    let mut log = DebugLog::new(DirVolume::new(&directory));

    if !log.init("vellum-basic.log") {
        eprintln!("could not start the debug trail in {}", directory.display());
        return;
    }

    log.append("entering the risky section");
    simulate_work(&mut log);
    log.flush();
    log.append("risky section survived");
    log.close();

    println!(
        "trail written to {}",
        directory.join("vellum-basic.log").display()
    );
}

fn simulate_work(log: &mut DebugLog<DirVolume>) {
    for attempt in 1..=3 {
        log.append_int("attempt ", attempt);
    }
    log.append_hex("final status: ", 0x00);
    vellum_log::append_formatted!(log, "template %d kept verbatim", 17);
}
