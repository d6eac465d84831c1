//! Single owner of per-user session state.
//!
//! `Session` holds the cart, the subscription tier and the selected doctor,
//! together with the store they persist into. It is the only surface the UI
//! layer calls: every operation either completes and persists, or returns an
//! error with the in-memory state unchanged.

use crate::appointment::{self, BookingRequest};
use crate::cart::Cart;
use crate::catalog;
use crate::db::{self, KeyValueStore};
use crate::error::AssistantError;
use crate::history;
use crate::models::{
    Appointment, CartLine, CartTotals, Doctor, HistoryEntry, HistoryEvent, PurchaseRecord,
    SubscriptionTier,
};
use crate::pricing::FeeQuote;
use crate::triage::{self, Analysis};

pub struct Session<S: KeyValueStore> {
    store: S,
    cart: Cart,
    subscription: SubscriptionTier,
    /// Doctor chosen for booking. Not persisted.
    selected_doctor: Option<&'static Doctor>,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore cart and subscription from `store`.
    pub fn load(store: S) -> Result<Self, AssistantError> {
        let cart = db::load_cart(&store)?;
        let subscription = db::load_subscription(&store)?;
        tracing::info!(
            lines = cart.len(),
            subscription = %subscription,
            "session restored"
        );
        Ok(Self {
            store,
            cart,
            subscription,
            selected_doctor: None,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Symptoms ────────────────────────────────────────────

    /// Classify symptom text and log the query to history.
    pub fn analyze_symptoms(&mut self, text: &str) -> Result<Analysis, AssistantError> {
        let analysis = triage::analyze(text)?;
        history::record(&mut self.store, HistoryEvent::Symptom(analysis.query.clone()))?;
        Ok(analysis)
    }

    // ── Cart ────────────────────────────────────────────────

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.compute_totals(self.subscription)
    }

    /// Apply `mutate` to a copy of the cart; commit only if it succeeds and
    /// the new cart is persisted.
    fn update_cart<T>(
        &mut self,
        mutate: impl FnOnce(&mut Cart) -> Result<T, AssistantError>,
    ) -> Result<T, AssistantError> {
        let mut next = self.cart.clone();
        let out = mutate(&mut next)?;
        db::save_cart(&mut self.store, &next)?;
        self.cart = next;
        Ok(out)
    }

    pub fn add_to_cart(
        &mut self,
        medicine_key: &str,
        dosage: Option<&str>,
        quantity: u32,
    ) -> Result<CartLine, AssistantError> {
        let medicine = catalog::find_medicine(medicine_key)?;
        self.update_cart(|cart| cart.add_item(medicine, dosage, quantity).cloned())
    }

    pub fn remove_from_cart(&mut self, index: usize) -> Result<CartLine, AssistantError> {
        self.update_cart(|cart| cart.remove_item(index))
    }

    pub fn set_cart_quantity(&mut self, index: usize, quantity: u32) -> Result<u32, AssistantError> {
        self.update_cart(|cart| cart.set_quantity(index, quantity))
    }

    /// Place the order at the current tier and empty the cart.
    ///
    /// The emptied cart is persisted before the purchase is recorded, so an
    /// error always means no order was placed.
    pub fn checkout(&mut self) -> Result<PurchaseRecord, AssistantError> {
        let record = self.cart.purchase_record(self.subscription)?;
        let emptied = Cart::new();
        db::save_cart(&mut self.store, &emptied)?;

        if let Err(err) = history::record(&mut self.store, HistoryEvent::Purchase(record.clone())) {
            if let Err(restore) = db::save_cart(&mut self.store, &self.cart) {
                tracing::warn!(error = %restore, "stored cart not restored after failed checkout");
            }
            return Err(err);
        }

        self.cart = emptied;
        tracing::info!(
            items = record.items.len(),
            total = %record.total,
            tier = %self.subscription,
            "order placed"
        );
        Ok(record)
    }

    // ── Subscription ────────────────────────────────────────

    pub fn subscription(&self) -> SubscriptionTier {
        self.subscription
    }

    pub fn select_plan(&mut self, tier: SubscriptionTier) -> Result<(), AssistantError> {
        db::save_subscription(&mut self.store, tier)?;
        self.subscription = tier;
        tracing::info!(subscription = %tier, "subscription plan selected");
        Ok(())
    }

    // ── Appointments ────────────────────────────────────────

    pub fn doctors(&self) -> &'static [Doctor] {
        catalog::doctors()
    }

    pub fn select_doctor(&mut self, id: u32) -> Result<&'static Doctor, AssistantError> {
        let doctor = appointment::select_doctor(id)?;
        self.selected_doctor = Some(doctor);
        Ok(doctor)
    }

    pub fn selected_doctor(&self) -> Option<&'static Doctor> {
        self.selected_doctor
    }

    fn require_doctor(&self) -> Result<&'static Doctor, AssistantError> {
        self.selected_doctor.ok_or_else(|| {
            AssistantError::Validation("Select a doctor before booking".into())
        })
    }

    pub fn quote_selected_fee(&self) -> Result<FeeQuote, AssistantError> {
        let doctor = self.require_doctor()?;
        Ok(appointment::quote_fee(doctor, self.subscription))
    }

    pub fn confirm_appointment(
        &mut self,
        request: &BookingRequest,
    ) -> Result<Appointment, AssistantError> {
        let doctor = self.require_doctor()?;
        appointment::confirm(doctor, request, self.subscription, &mut self.store)
    }

    // ── History ─────────────────────────────────────────────

    pub fn history(&self) -> Result<Vec<HistoryEntry>, AssistantError> {
        history::read_all(&self.store)
    }
}
