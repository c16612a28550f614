//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record every call and allow tests to verify behavior.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::sync::{Arc, RwLock};

use crate::adapters::InMemoryCalculationRepository;
use crate::domain::entities::{Calculation, CalculationId, Operation};
use crate::domain::ports::{
    AddCommand, CalculationObserver, CalculationRepository, CalculationResponse,
    CalculatorInputPort, DivideCommand, MultiplyCommand, SubtractCommand,
};
use crate::error::{AppError, DomainError, ObserverError, StoreError};

// ============================================================================
// Shared call log
// ============================================================================

/// A call made to one of the output ports
#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    Observed(Calculation),
    Saved(Calculation),
}

/// Ordered record of port calls shared between mocks
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<PortCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: PortCall) {
        self.calls.write().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<PortCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn observed(&self) -> Vec<Calculation> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PortCall::Observed(calculation) => Some(calculation),
                PortCall::Saved(_) => None,
            })
            .collect()
    }

    pub fn saved(&self) -> Vec<Calculation> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PortCall::Saved(calculation) => Some(calculation),
                PortCall::Observed(_) => None,
            })
            .collect()
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

pub struct RecordingObserver {
    log: CallLog,
    should_fail: bool,
}

impl RecordingObserver {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            should_fail: false,
        }
    }

    /// Records the call, then fails
    pub fn failing(log: CallLog) -> Self {
        Self {
            log,
            should_fail: true,
        }
    }
}

#[async_trait]
impl CalculationObserver for RecordingObserver {
    async fn observe(&self, calculation: &Calculation) -> Result<(), ObserverError> {
        self.log.record(PortCall::Observed(calculation.clone()));
        if self.should_fail {
            return Err(ObserverError::Sink("observer unavailable".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Recording Repository
// ============================================================================

/// Records saves in the call log and keeps them in an in-memory store
pub struct RecordingRepository {
    log: CallLog,
    inner: InMemoryCalculationRepository,
    saved_ids: Arc<RwLock<Vec<CalculationId>>>,
    should_fail: bool,
}

impl RecordingRepository {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            inner: InMemoryCalculationRepository::new(),
            saved_ids: Arc::new(RwLock::new(Vec::new())),
            should_fail: false,
        }
    }

    /// Records the call, then fails
    pub fn failing(log: CallLog) -> Self {
        Self {
            should_fail: true,
            ..Self::new(log)
        }
    }

    /// Identifiers handed out so far, in save order
    pub fn saved_ids(&self) -> Vec<CalculationId> {
        self.saved_ids.read().unwrap().clone()
    }
}

#[async_trait]
impl CalculationRepository for RecordingRepository {
    async fn save(&self, calculation: &Calculation) -> Result<CalculationId, StoreError> {
        self.log.record(PortCall::Saved(calculation.clone()));
        if self.should_fail {
            return Err(StoreError::Backend("store unavailable".to_string()));
        }

        let id = self.inner.save(calculation).await?;
        self.saved_ids.write().unwrap().push(id);
        Ok(id)
    }

    async fn find_by_id(&self, id: &CalculationId) -> Result<Option<Calculation>, StoreError> {
        self.inner.find_by_id(id).await
    }
}

// ============================================================================
// Stub Calculator (input port)
// ============================================================================

/// A command as seen by the stub calculator
#[derive(Debug, Clone)]
pub struct ReceivedCommand {
    pub operation: Operation,
    pub operand1: Option<BigDecimal>,
    pub operand2: Option<BigDecimal>,
    pub scale: Option<i64>,
}

/// Input port stand-in for handler tests
pub struct StubCalculator {
    outcome: Result<CalculationResponse, DomainError>,
    received: Arc<RwLock<Vec<ReceivedCommand>>>,
}

impl StubCalculator {
    /// Answer every call with `response`
    pub fn returning(response: CalculationResponse) -> Self {
        Self {
            outcome: Ok(response),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fail every call with `error`
    pub fn failing_with(error: DomainError) -> Self {
        Self {
            outcome: Err(error),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<ReceivedCommand> {
        self.received.read().unwrap().clone()
    }

    fn respond(&self, command: ReceivedCommand) -> Result<CalculationResponse, AppError> {
        self.received.write().unwrap().push(command);
        self.outcome.clone().map_err(AppError::from)
    }
}

#[async_trait]
impl CalculatorInputPort for StubCalculator {
    async fn perform_addition(
        &self,
        command: AddCommand,
    ) -> Result<CalculationResponse, AppError> {
        self.respond(ReceivedCommand {
            operation: Operation::Add,
            operand1: command.operand1,
            operand2: command.operand2,
            scale: None,
        })
    }

    async fn perform_subtraction(
        &self,
        command: SubtractCommand,
    ) -> Result<CalculationResponse, AppError> {
        self.respond(ReceivedCommand {
            operation: Operation::Subtract,
            operand1: command.operand1,
            operand2: command.operand2,
            scale: None,
        })
    }

    async fn perform_multiplication(
        &self,
        command: MultiplyCommand,
    ) -> Result<CalculationResponse, AppError> {
        self.respond(ReceivedCommand {
            operation: Operation::Multiply,
            operand1: command.operand1,
            operand2: command.operand2,
            scale: None,
        })
    }

    async fn perform_division(
        &self,
        command: DivideCommand,
    ) -> Result<CalculationResponse, AppError> {
        self.respond(ReceivedCommand {
            operation: Operation::Divide,
            operand1: command.operand1,
            operand2: command.operand2,
            scale: Some(command.scale),
        })
    }
}
