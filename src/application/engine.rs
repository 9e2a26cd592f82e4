use crate::domain::application::{
    ApplicationStatus, CreateApplication, LoanApplication, TransactionMetadata,
};
use crate::domain::monitor;
use crate::domain::policy::LenderPolicy;
use crate::domain::ports::{ApplicationStoreBox, IdGeneratorBox, InvocationContext};
use crate::domain::schedule::{self, RepaymentStatus};
use crate::error::{LendingError, Result};

/// The loan application lifecycle engine.
///
/// Each operation is a synchronous read-modify-write against one
/// application record: load, mutate, append an audit entry, persist.
/// Applications are fully independent; conflict detection between
/// concurrent writers to the same key is left to the store.
pub struct LendingEngine {
    store: ApplicationStoreBox,
    ids: IdGeneratorBox,
    lenders: Vec<LenderPolicy>,
}

impl LendingEngine {
    /// Creates an engine with the reference four-lender panel.
    pub fn new(store: ApplicationStoreBox, ids: IdGeneratorBox) -> Self {
        Self::with_lenders(store, ids, LenderPolicy::default_panel())
    }

    pub fn with_lenders(
        store: ApplicationStoreBox,
        ids: IdGeneratorBox,
        lenders: Vec<LenderPolicy>,
    ) -> Self {
        Self {
            store,
            ids,
            lenders,
        }
    }

    /// Creates a new application and collects one quotation per lender.
    ///
    /// The record is persisted twice, once at `Applied` and once at
    /// `QuotationsReceived`, so both writes are individually auditable.
    pub async fn create_application(
        &self,
        request: CreateApplication,
        ctx: &dyn InvocationContext,
    ) -> Result<LoanApplication> {
        if request.application_number.is_empty() {
            return Err(LendingError::InvalidInput(
                "application number must not be empty".to_string(),
            ));
        }
        if self.store.get(&request.application_number).await?.is_some() {
            return Err(LendingError::DuplicateApplication(
                request.application_number,
            ));
        }

        let mut app = LoanApplication::new(request);
        self.save(&mut app, ctx).await?;

        let params = app.evaluation_params();
        let bid_date = ctx.timestamp();
        app.quotations = self
            .lenders
            .iter()
            .map(|lender| lender.evaluate(&params, self.ids.as_ref(), bid_date))
            .collect();
        app.status = ApplicationStatus::QuotationsReceived;
        self.save(&mut app, ctx).await?;

        log::debug!(
            "application {} created with {} quotations",
            app.application_number,
            app.quotations.len()
        );
        Ok(app)
    }

    /// Applies the caller's bid decision to the application.
    ///
    /// The supplied status is applied as-is. On acceptance, the
    /// quotation matching `bidding_number` is flagged as the winner, an
    /// account number is assigned and the repayment schedule is
    /// generated. If no quotation matches, the status change still
    /// takes effect but no account or schedule is created.
    pub async fn confirm_bid(
        &self,
        application_number: &str,
        bidding_number: u32,
        bid_status: ApplicationStatus,
        ctx: &dyn InvocationContext,
    ) -> Result<LoanApplication> {
        let mut app = self.load(application_number).await?;
        app.status = bid_status;

        if bid_status == ApplicationStatus::BidAccepted {
            if let Some(quote) = app
                .quotations
                .iter_mut()
                .find(|q| q.bidding_number == bidding_number)
            {
                quote.is_winning_bid = true;
                let winning = quote.clone();
                app.account_number = Some(self.ids.next_id());
                app.repayment_schedule = schedule::generate_repayment_schedule(&winning);
                log::debug!(
                    "application {application_number}: bid {bidding_number} won, {} installments scheduled",
                    app.repayment_schedule.len()
                );
            } else {
                log::warn!(
                    "application {application_number}: no quotation matches bid {bidding_number}"
                );
            }
        }

        self.save(&mut app, ctx).await?;
        Ok(app)
    }

    /// Updates the status of one installment and reclassifies the loan.
    ///
    /// Only the first installment matching `installment_number` is
    /// updated. The default classification is recomputed from the whole
    /// schedule and persisted even when no installment matched.
    pub async fn change_payment_status(
        &self,
        application_number: &str,
        installment_number: u32,
        repayment_status: RepaymentStatus,
        ctx: &dyn InvocationContext,
    ) -> Result<LoanApplication> {
        let mut app = self.load(application_number).await?;

        let status = app.status;
        if let Some(installment) = app
            .repayment_schedule
            .iter_mut()
            .find(|p| p.installment_number == installment_number)
        {
            installment.repayment_status = repayment_status;
            installment.repayment_date = Some(ctx.timestamp());
            installment.metadata = Some(TransactionMetadata::stamp(status, ctx));
        } else {
            log::warn!(
                "application {application_number}: no installment {installment_number} in schedule"
            );
        }

        app.status = monitor::classify(&app.repayment_schedule);
        self.save(&mut app, ctx).await?;
        Ok(app)
    }

    /// Returns the stored record verbatim.
    pub async fn get_application(&self, application_number: &str) -> Result<LoanApplication> {
        self.load(application_number).await
    }

    async fn load(&self, application_number: &str) -> Result<LoanApplication> {
        self.store
            .get(application_number)
            .await?
            .ok_or_else(|| LendingError::NotFound(application_number.to_string()))
    }

    /// Appends an audit entry for the current state, then persists.
    /// The append travels with the write, so every persisted version of
    /// the record carries its own trail entry.
    async fn save(&self, app: &mut LoanApplication, ctx: &dyn InvocationContext) -> Result<()> {
        app.transactions
            .push(TransactionMetadata::stamp(app.status, ctx));
        self.store.put(app).await
    }
}
