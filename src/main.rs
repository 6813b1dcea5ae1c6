#![deny(unsafe_code)]
#![no_main]
#![no_std]

use panic_rtt_target as _panic_handler;

/// submodule holding task handlers
mod tasks;

/// board glue: the DMA engine and the status LEDs
mod hw;

/*
 Declare the RTIC application itself.
 Firstly, we must provide it with the path to the device's PAC.
 We also want the device's peripherals, so we request those.
   - RTIC will provde these on the Context object of init.
 Lastly, the LED pulse trains and the heartbeat are software tasks, so we need to donate
 some unused interrupts to RTIC.
  - this is done via the `dispatchers` argument
*/
#[rtic::app(
    device = stm32f4xx_hal::pac,
    peripherals = true,
    dispatchers = [SPI2, SPI3],
)]
mod app {
    use dwt_systick_monotonic::DwtSystick;
    use rtt_target::{rprintln, rtt_init_print};
    use stm32f4xx_hal::{
        dma::{config::DmaConfig, MemoryToPeripheral, Stream6, StreamsTuple, Transfer},
        gpio::{Edge, Input, Output, PushPull, PA0, PD12},
        pac::{DMA2, USART6},
        prelude::*,
        serial::{self, Serial},
    };
    use tx_coordinator::{Coordinator, CoordinatorConfig, LineId, Outcome, TxBuffer};

    use crate::hw::{halt, DmaEngine, IndicatorCommand, Leds, RticIndicators};

    /// HSE crystal fitted on the Discovery board.
    const HSE_FREQ_MHZ: u32 = 8;
    pub(crate) const SYSCLK_FREQ: u32 = 168_000_000;
    #[monotonic(binds = SysTick, default = true)]
    type SysMono = DwtSystick<SYSCLK_FREQ>;
    pub(crate) type MonoDuration = fugit::TimerDurationU64<SYSCLK_FREQ>;

    /// HC-05 default link speed.
    const BAUD_RATE: u32 = 9_600;
    /// Capacity of the DMA transmit buffer; longer messages are truncated.
    pub(crate) const TX_BUFSIZE: usize = 128;
    pub(crate) const GREETING: &[u8] = b"Hello from STM32 via HC-05!\r\n";
    /// The user button sits on PA0, i.e. EXTI line 0.
    pub(crate) const BUTTON_LINE: LineId = LineId(0);

    /* bring dependencies into scope */
    /// Serial connection type
    pub(crate) type Usart6Tx = serial::Tx<USART6>;
    /// Serial TX DMA type. USART6_TX is request channel 5 of DMA2 stream 6.
    pub(crate) type Usart6TransferTx =
        Transfer<Stream6<DMA2>, 5, Usart6Tx, MemoryToPeripheral, &'static [u8]>;
    pub(crate) type Button = PA0<Input>;
    pub(crate) type HeartbeatLed = PD12<Output<PushPull>>;
    pub(crate) type BeaconCoordinator = Coordinator<DmaEngine, RticIndicators>;

    /* resources shared across RTIC tasks */
    #[shared]
    struct Shared {
        /// transfer state, message and debounce timestamp. Every access is a lock.
        coordinator: BeaconCoordinator,
    }

    /* resources local to specific RTIC tasks */
    #[local]
    struct Local {
        button: Button,
        leds: Leds,
        heartbeat_led: HeartbeatLed,
    }

    #[init(local = [tx_buf: TxBuffer<TX_BUFSIZE> = TxBuffer::new()])]
    fn init(mut ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        /*
            This patch enables the debugger to behave correctly during a WFI
            See Also Github: https://github.com/probe-rs/probe-rs/issues/350#issuecomment-740550519
        */
        ctx.device.DBGMCU.cr.modify(|_, w| {
            w.dbg_sleep().set_bit();
            w.dbg_standby().set_bit();
            w.dbg_stop().set_bit()
        });

        // Enable RTT logging
        rtt_init_print!();
        rprintln!("hello, world!");

        // 8 MHz HSE through the PLL up to 168 MHz; the HAL derives the bus prescalers.
        let rcc = ctx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(HSE_FREQ_MHZ.MHz())
            .sysclk(SYSCLK_FREQ.Hz())
            .freeze();

        /* start RTIC monotonics */
        let mono = DwtSystick::new(
            &mut ctx.core.DCB,
            ctx.core.DWT,
            ctx.core.SYST,
            clocks.sysclk().raw(),
        );

        let gpioa = ctx.device.GPIOA.split();
        let gpioc = ctx.device.GPIOC.split();
        let gpiod = ctx.device.GPIOD.split();

        // LEDs first, so that any failure below can still be shown.
        let heartbeat_led = gpiod.pd12.into_push_pull_output();
        let mut leds = Leds::new(
            gpiod.pd13.into_push_pull_output().erase(),
            gpiod.pd15.into_push_pull_output().erase(),
            gpiod.pd14.into_push_pull_output().erase(),
        );

        // user button: rising edge on EXTI0
        let mut syscfg = ctx.device.SYSCFG.constrain();
        let mut exti = ctx.device.EXTI;
        let mut button = gpioa.pa0.into_pull_down_input();
        button.make_interrupt_source(&mut syscfg);
        button.trigger_on_edge(&mut exti, Edge::Rising);
        button.enable_interrupt(&mut exti);

        // USART6 TX on PC6 (AF8), DMA requests enabled.
        let usart6_config = serial::config::Config::default()
            .baudrate(BAUD_RATE.bps())
            .wordlength_8()
            .parity_none()
            .stopbits(serial::config::StopBits::STOP1)
            .dma(serial::config::DmaConfig::Tx);
        let usart6: Usart6Tx =
            match Serial::tx(ctx.device.USART6, gpioc.pc6.into_alternate(), usart6_config, &clocks) {
                Ok(tx) => tx,
                Err(_) => halt(&mut leds, "failed to configure USART6"),
            };

        // the message is written exactly once, then only DMA reads it.
        let tx_buf = ctx.local.tx_buf;
        let written = tx_buf.fill(GREETING);
        let message: &'static [u8] = tx_buf.freeze();
        rprintln!("message of {} bytes ready", written);

        // set up the DMA transfer.
        let dma2_streams: StreamsTuple<DMA2> = StreamsTuple::new(ctx.device.DMA2);
        let dma2_stream6_config = DmaConfig::default()
            .memory_increment(true)
            .transfer_complete_interrupt(true)
            .transfer_error_interrupt(true);
        let usart6_dma_transfer_tx: Usart6TransferTx = Transfer::init_memory_to_peripheral(
            dma2_streams.6,
            usart6,
            message,
            None,
            dma2_stream6_config,
        );

        let config = CoordinatorConfig {
            trigger_line: BUTTON_LINE,
            ..CoordinatorConfig::DEFAULT
        };
        let mut coordinator = Coordinator::new(
            DmaEngine::new(usart6_dma_transfer_tx),
            RticIndicators,
            message,
            config,
        );

        // the stream completes after init returns, once interrupts are unmasked.
        match coordinator.boot() {
            Outcome::Submitted => rprintln!("boot transmission started."),
            outcome => {
                rprintln!("[ERROR] boot transmission failed: {:?}", outcome);
                halt(&mut leds, "boot transmission failed")
            }
        }

        if heartbeat::spawn().is_err() {
            rprintln!("[WARNING] failed to kick off heartbeat task.");
        }

        // lastly return the shared and local resources, as per RTIC's spec.
        (
            Shared { coordinator },
            Local {
                button,
                leds,
                heartbeat_led,
            },
            init::Monotonics(mono),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        // all work happens in interrupt context
        loop {
            cortex_m::asm::wfi();
        }
    }

    /* bring externed tasks into scope */
    use crate::tasks::{heartbeat, indicator, on_dma2_stream6, on_exti0};

    // RTIC docs specify we can modularize the code by using these `extern` blocks.
    // This allows us to specify the tasks in other modules and still work within
    // RTIC's infrastructure.
    extern "Rust" {
        // button press: debounce, then try to start a transfer
        #[task(binds = EXTI0, local = [button], shared = [coordinator], priority = 1)]
        fn on_exti0(context: on_exti0::Context);

        // DMA2 stream 6 transfer complete / transfer error
        #[task(binds = DMA2_STREAM6, shared = [coordinator], priority = 2)]
        fn on_dma2_stream6(context: on_dma2_stream6::Context);

        // LED effects requested by the coordinator
        #[task(local = [leds], capacity = 8, priority = 1)]
        fn indicator(context: indicator::Context, command: IndicatorCommand);

        // periodic "CPU is free" blink
        #[task(local = [heartbeat_led], priority = 1)]
        fn heartbeat(context: heartbeat::Context);
    }
}
