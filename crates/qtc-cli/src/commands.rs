use anyhow::Result;
use tracing::{debug, info_span};

use qtc_cli::outcome::{OutputFormat, command_output};
use qtc_cli::summary::formula_catalogue;
use qtc_core::evaluate;
use qtc_model::{QrsType, RawInputs};

use crate::cli::{MeasurementArgs, NarrowArgs, OutputFormatArg, WideArgs};

pub fn run_narrow(args: &NarrowArgs) -> Result<i32> {
    let inputs = raw_inputs(QrsType::Narrow, &args.measurements, None, None);
    run_evaluation(&inputs, output_format(args.measurements.format))
}

pub fn run_wide(args: &WideArgs) -> Result<i32> {
    let inputs = raw_inputs(
        QrsType::Wide,
        &args.measurements,
        args.qrs_duration.as_deref(),
        args.sex.as_deref(),
    );
    run_evaluation(&inputs, output_format(args.measurements.format))
}

pub fn run_formulas() -> Result<()> {
    println!("{}", formula_catalogue());
    Ok(())
}

fn raw_inputs(
    qrs_type: QrsType,
    measurements: &MeasurementArgs,
    qrs_duration: Option<&str>,
    sex: Option<&str>,
) -> RawInputs {
    RawInputs::from_text(
        qrs_type,
        measurements.heart_rate.as_deref().unwrap_or_default(),
        measurements.qt_interval.as_deref().unwrap_or_default(),
        qrs_duration.unwrap_or_default(),
        sex.unwrap_or_default(),
    )
}

fn run_evaluation(inputs: &RawInputs, format: OutputFormat) -> Result<i32> {
    let span = info_span!("qtc", mode = %inputs.qrs_type);
    let _guard = span.enter();
    debug!(?inputs, "parsed command-line measurements");
    let output = command_output(&evaluate(inputs), format)?;
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
    Ok(output.exit_code)
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
