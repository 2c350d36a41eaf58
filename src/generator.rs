//! Generator facade tying reassembly, encoding and delivery together.
//!
//! The generator is single-threaded and run-to-completion: records arrive
//! through [`Scte35Generator::input`], the multiplexer drives delivery
//! through [`Scte35Generator::prepare`] with a non-decreasing mux date, and
//! both calls finish all their work before returning.

use tracing::{info, warn};

use crate::codec;
use crate::descriptors::{ExportDescriptor, descriptor_is_well_formed};
use crate::error::{GeneratorError, Result};
use crate::flow::{self, INPUT_FLOW_DEF};
use crate::queue::{PendingMessage, PendingQueue};
use crate::reassembly::Reassembler;
use crate::record::{SpliceCommandType, SpliceRecord};
use crate::sink::{OutputSection, SectionSink};

/// Control requests understood by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlRequest {
    /// Accept a new input flow definition.
    SetFlowDef(String),
    /// Change the signaling interval (27 MHz ticks; 0 disables emission).
    SetInterval(u64),
    /// Read back the signaling interval.
    GetInterval,
    /// Advance the delivery scheduler to the given mux date.
    Prepare { cr_sys: u64, latency: u64 },
}

/// Replies to control requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlResponse {
    Handled,
    Interval(u64),
}

/// SCTE-35 section generator for one transport-stream program.
///
/// Create one instance per program with [`Scte35Generator::new`]; instances
/// are fully independent.
pub struct Scte35Generator<S: SectionSink> {
    output: S,
    exporter: Option<Box<dyn ExportDescriptor>>,
    flow_def: Option<String>,
    interval: u64,
    last_cr_sys: u64,
    null_section: Option<Vec<u8>>,
    reassembler: Reassembler,
    pending: PendingQueue,
}

impl<S: SectionSink> Scte35Generator<S> {
    /// Creates a generator emitting into `output`.
    pub fn new(output: S) -> Self {
        Self {
            output,
            exporter: None,
            flow_def: None,
            interval: 0,
            last_cr_sys: 0,
            null_section: None,
            reassembler: Reassembler::new(),
            pending: PendingQueue::default(),
        }
    }

    /// Installs the exporter rendering descriptor records of time_signal
    /// events.
    pub fn set_descriptor_exporter(&mut self, exporter: Box<dyn ExportDescriptor>) {
        self.exporter = Some(exporter);
    }

    /// The configured signaling interval, in 27 MHz ticks.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Sets the signaling interval and republishes the output flow
    /// definition.
    pub fn set_interval(&mut self, interval: u64) {
        self.interval = interval;
        self.publish_flow_def();
    }

    /// Accepts the upstream flow definition, rejecting a mismatched one
    /// without altering existing state.
    pub fn set_flow_def(&mut self, flow_def: &str) -> Result<()> {
        if !flow_def.starts_with(INPUT_FLOW_DEF) {
            return Err(GeneratorError::RejectedFlowDef {
                def: flow_def.to_owned(),
            });
        }
        let first = self.flow_def.is_none();
        self.flow_def = Some(flow_def.to_owned());
        if first {
            self.build_null_section()?;
            self.publish_flow_def();
        }
        Ok(())
    }

    /// Number of events waiting for delivery.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Feeds one input record.
    ///
    /// Records must arrive in production order. A clear record drops any
    /// half-collected event, strips pending delayed sections and forces the
    /// degraded state out on the next tick.
    pub fn input(&mut self, record: SpliceRecord) -> Result<()> {
        if record.empty {
            info!("now using splice_null command due to empty event");
            self.reassembler.reset();
            self.pending.clear_delayed();
            self.last_cr_sys = 0;
            return Ok(());
        }

        if record.command.is_none() {
            warn!("no command type in record");
            return Ok(());
        }

        for records in self.reassembler.push(record) {
            self.flush(records)?;
        }
        Ok(())
    }

    /// Advances the scheduler to mux date `cr_sys`, emitting at most one
    /// section.
    ///
    /// `latency` is the channel output latency; accepted for symmetry with
    /// the host multiplexer, the scheduling decision does not use it.
    pub fn prepare(&mut self, cr_sys: u64, _latency: u64) -> Result<()> {
        if self.flow_def.is_none()
            || self.null_section.is_none()
            || self.interval == 0
            || self.last_cr_sys.saturating_add(self.interval) > cr_sys
        {
            return Ok(());
        }

        let section = match self.pending.resolve(cr_sys) {
            Some(section) => section,
            None => match &self.null_section {
                Some(null_section) => null_section.clone(),
                None => return Ok(()),
            },
        };
        self.send(section, cr_sys);
        Ok(())
    }

    /// Dispatches one control request.
    pub fn control(&mut self, request: ControlRequest) -> Result<ControlResponse> {
        match request {
            ControlRequest::SetFlowDef(flow_def) => {
                self.set_flow_def(&flow_def)?;
                Ok(ControlResponse::Handled)
            }
            ControlRequest::SetInterval(interval) => {
                self.set_interval(interval);
                Ok(ControlResponse::Handled)
            }
            ControlRequest::GetInterval => Ok(ControlResponse::Interval(self.interval)),
            ControlRequest::Prepare { cr_sys, latency } => {
                self.prepare(cr_sys, latency)?;
                Ok(ControlResponse::Handled)
            }
        }
    }

    /// The output sink.
    pub fn output(&self) -> &S {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// Encodes one completed event description and enqueues the result.
    fn flush(&mut self, records: Vec<SpliceRecord>) -> Result<()> {
        let Some(first) = records.first() else {
            return Ok(());
        };
        let Some(command) = first.command else {
            warn!("no command type found");
            return Ok(());
        };

        match command {
            SpliceCommandType::SpliceInsert => {
                let pair = codec::encode_insert(first)?;
                let event_id = first.event_id;
                self.enqueue(first.pts_sys.unwrap_or(0), pair);
                info!(event_id, "now using splice_insert command");
            }
            SpliceCommandType::TimeSignal => {
                let descriptors = self.export_descriptors(&records[1..]);
                let pair = codec::encode_time_signal(first, &descriptors)?;
                self.enqueue(first.pts_sys.unwrap_or(0), pair);
                info!("now using time_signal command");
            }
            SpliceCommandType::SpliceNull => {
                self.build_null_section()?;
            }
            SpliceCommandType::Reserved(value) => {
                warn!(command_type = value, "unimplemented command type");
            }
        }
        Ok(())
    }

    fn enqueue(&mut self, expiry: u64, pair: codec::SectionPair) {
        self.pending
            .push(PendingMessage::new(expiry, pair.delayed, Some(pair.immediate)));
        // force sending the table on the next tick
        self.last_cr_sys = 0;
    }

    fn export_descriptors(&self, records: &[SpliceRecord]) -> Vec<Vec<u8>> {
        let mut descriptors = Vec::with_capacity(records.len());
        for record in records {
            let blob = self
                .exporter
                .as_ref()
                .and_then(|exporter| exporter.export(record));
            match blob {
                Some(blob) if descriptor_is_well_formed(&blob) => descriptors.push(blob),
                _ => warn!("failed to export descriptor"),
            }
        }
        descriptors
    }

    fn build_null_section(&mut self) -> Result<()> {
        if self.flow_def.is_none() {
            return Ok(());
        }
        self.null_section = Some(codec::encode_null()?);
        Ok(())
    }

    fn publish_flow_def(&mut self) {
        if let Some(flow_def) = flow::build_output_flow_def(self.interval) {
            self.output.flow_def(flow_def);
        }
    }

    fn send(&mut self, payload: Vec<u8>, cr_sys: u64) {
        self.output.section(OutputSection {
            payload,
            date_start: cr_sys,
            date_end: cr_sys,
        });
        self.last_cr_sys = cr_sys;
    }
}
