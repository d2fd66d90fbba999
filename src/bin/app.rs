#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use airscout_core::ScanControl;
use airscout_esp::config;
use airscout_esp::infrastructure::drivers::init_wifi;
use airscout_esp::infrastructure::tasks::scan_task;

esp_bootloader_esp_idf::esp_app_desc!();

// static_cell::make_static! in main causes a compiler error
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory (64 + 32 KB); the radio driver needs most of it
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!(
        "{} ({}) version {}",
        config::DEVICE.name,
        config::DEVICE.id,
        config::FIRMWARE.version
    );

    // Bring up the radio and spawn the scan loop
    let driver = match init_wifi(peripherals.WIFI) {
        Ok(driver) => driver,
        Err(e) => panic!("scan: radio bring-up failed: {e}"),
    };
    let control = mk_static!(ScanControl, ScanControl::new());
    spawner.spawn(scan_task(driver, control)).ok();

    loop {
        Timer::after(Duration::from_secs(60)).await;
        println!(
            "scan: {} cycle(s) completed, {} access point(s) in last scan",
            control.cycles(),
            control.last_total()
        );
    }
}
