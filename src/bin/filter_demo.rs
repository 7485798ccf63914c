/// filter_demo: synthesize a two-tone test signal, run the spectral mask
/// filter and the causal FIR filter over it, and report how much of each tone
/// survives.
///
/// Output (stdout):
///   spectral  tone=50Hz   before=1.0000 after=1.0000
///   spectral  tone=120Hz  before=0.5000 after=0.0000
///   fir       tone=…      before=…      after=…     (steady-state, delay trimmed)
///   fir       gain@…Hz …                             (from freqz)
use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use sigfilt::{
    fft_filter, firwin, freqz, lfilter, trim_group_delay,
    synth::{magnitude_spectrum, sample_times, sum_of_sines},
    FilterConfig, FilterKind, Window,
};

#[derive(Parser, Debug)]
#[command(name = "filter_demo", about = "Spectral mask vs. windowed-sinc FIR on a two-tone signal")]
struct Args {
    /// Sampling rate (Hz).
    #[arg(long, default_value_t = 500.0)]
    fs: f64,

    /// Signal duration (s).
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Cutoff frequency (Hz).
    #[arg(long, default_value_t = 80.0)]
    cutoff: f64,

    /// Spectral mask kind: lowpass | highpass.
    #[arg(long, default_value = "lowpass")]
    kind: FilterKind,

    /// FIR length.
    #[arg(long, default_value_t = 101)]
    numtaps: usize,

    /// FIR window: hamming | hann | blackman.
    #[arg(long, default_value = "hamming")]
    window: Window,

    /// Tones as freq:amp pairs (comma-separated).
    #[arg(long, default_value = "50:1.0,120:0.5")]
    tones: String,

    /// Log filter internals.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose)?;

    let cfg = FilterConfig {
        fs: args.fs,
        cutoff: args.cutoff,
        kind: args.kind,
        numtaps: args.numtaps,
        window: args.window,
        ..FilterConfig::default()
    };
    let tones = parse_tones(&args.tones)?;

    let t = sample_times(cfg.fs, args.duration)?;
    let x = sum_of_sines(&t, &tones);
    info!("{} samples @ {} Hz, tones {:?}", x.len(), cfg.fs, tones);

    // ── Spectral mask ──────────────────────────────────────────────────────
    let spec = fft_filter(&x, cfg.fs, cfg.cutoff, cfg.kind)?;
    info!("spectral {} @ {} Hz, imag residue {:.2e}", cfg.kind, cfg.cutoff, spec.imag_residue);
    report("spectral", &x, &spec.filtered, cfg.fs, &tones)?;

    // ── FIR ────────────────────────────────────────────────────────────────
    let taps = firwin(cfg.numtaps, cfg.cutoff, cfg.fs, cfg.window)?;
    let y = lfilter(&taps, &x)?;
    info!("fir {} taps ({}), group delay {} samples", taps.len(), cfg.window, cfg.group_delay());

    // Compare in steady state: drop the delay, then the start-up transient.
    let aligned = trim_group_delay(&y, cfg.numtaps);
    let settle = cfg.numtaps - 1;
    if aligned.len() > settle {
        let before = &x[settle..aligned.len()];
        report("fir", before, &aligned[settle..], cfg.fs, &tones)?;
    } else {
        info!("signal shorter than the FIR transient, skipping tone report");
    }

    let resp = freqz(&taps, cfg.response_points)?;
    for &(f, _) in &tones {
        if let Some(g) = resp.gain_at(f, cfg.fs) {
            println!("fir       gain@{f}Hz  {g:.4}  ({:.1} dB)", 20.0 * g.log10());
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

/// Parse `"50:1.0,120:0.5"` into `[(50.0, 1.0), (120.0, 0.5)]`.
fn parse_tones(s: &str) -> Result<Vec<(f64, f64)>> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| -> Result<(f64, f64)> {
            let (f, a) = p
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("tone '{p}' is not freq:amp"))?;
            Ok((f.trim().parse::<f64>()?, a.trim().parse::<f64>()?))
        })
        .collect()
}

/// Print one-sided magnitude at each tone before and after filtering.
fn report(label: &str, before: &[f64], after: &[f64], fs: f64, tones: &[(f64, f64)]) -> Result<()> {
    let (freqs, mag_in) = magnitude_spectrum(before, fs)?;
    let (_, mag_out) = magnitude_spectrum(after, fs)?;
    for &(f, _) in tones {
        let k = nearest_bin(&freqs, f);
        println!(
            "{label:<9} tone={f}Hz  before={:.4} after={:.4}",
            mag_in[k], mag_out[k]
        );
    }
    Ok(())
}

fn nearest_bin(freqs: &[f64], f: f64) -> usize {
    freqs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (**a - f).abs().total_cmp(&(**b - f).abs()))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
