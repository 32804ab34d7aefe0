//! Account service
//!
//! The use-case layer: registration, login and every wallet mutation a
//! logged-in user can make. Each mutation loads the user, runs the domain
//! service, writes the user back and appends an audit entry.

use serde_json::json;
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::crypto::{hash_password, verify_password};
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::{Budget, Category, Money, Transaction, TransactionType, User, Wallet};
use crate::storage::Storage;

use super::budget::BudgetService;
use super::session::Session;
use super::transfer::{TransferOutcome, TransferPlan, TransferService};
use super::wallet::WalletService;
use super::warning::RecordOutcome;

const BAD_CREDENTIALS: &str = "Invalid login or password";

/// Service for user accounts and their wallets
pub struct AccountService<'a> {
    storage: &'a Storage,
    wallets: WalletService,
    budgets: BudgetService,
    transfers: TransferService,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        let wallets = WalletService::new();
        Self {
            storage,
            wallets,
            budgets: BudgetService::new(),
            transfers: TransferService::new(wallets),
        }
    }

    /// Register a new user with an empty wallet
    pub fn register(&self, login: &str, password: &str) -> MoneyTrackResult<User> {
        User::validate_login(login).map_err(|e| MoneyTrackError::Validation(e.to_string()))?;
        if password.is_empty() {
            return Err(MoneyTrackError::Validation(
                "Password cannot be empty".into(),
            ));
        }

        if self.storage.users().exists(login)? {
            return Err(MoneyTrackError::Duplicate {
                entity_type: "User",
                identifier: login.to_string(),
            });
        }

        let user = User::new(login, hash_password(password)?);
        self.storage.users().save(&user)?;

        self.storage.log_audit(&AuditEntry::create(
            EntityType::User,
            login,
            None,
            &json!({ "login": login }),
        ))?;

        info!(login, "user registered");
        Ok(user)
    }

    /// Check credentials and open a session
    pub fn login(&self, login: &str, password: &str) -> MoneyTrackResult<Session> {
        let user = self
            .storage
            .users()
            .find_by_login(login)?
            .ok_or_else(|| MoneyTrackError::Authentication(BAD_CREDENTIALS.into()))?;

        if !verify_password(password, user.password_hash())? {
            return Err(MoneyTrackError::Authentication(BAD_CREDENTIALS.into()));
        }

        Ok(Session::new(user.login()))
    }

    /// Record income, optionally categorized
    pub fn add_income(
        &self,
        session: &Session,
        amount: Money,
        category: Option<Category>,
        description: &str,
    ) -> MoneyTrackResult<RecordOutcome> {
        check_amount(amount)?;
        self.record(
            session,
            Transaction::income(category, amount, description),
        )
    }

    /// Record an expense; a category is required
    pub fn add_expense(
        &self,
        session: &Session,
        amount: Money,
        category: Option<Category>,
        description: &str,
    ) -> MoneyTrackResult<RecordOutcome> {
        let category = category
            .ok_or_else(|| MoneyTrackError::Validation("Expense requires a category".into()))?;
        check_amount(amount)?;
        self.record(
            session,
            Transaction::expense(Some(category), amount, description),
        )
    }

    fn record(&self, session: &Session, transaction: Transaction) -> MoneyTrackResult<RecordOutcome> {
        let mut user = self.load(session)?;
        check_room(user.wallet(), [&transaction])?;
        let outcome = self
            .wallets
            .add_transaction(user.wallet_mut(), transaction.clone());
        self.storage.users().update(&user)?;

        self.storage.log_audit(&AuditEntry::create(
            EntityType::Transaction,
            transaction.id().as_uuid().to_string(),
            Some(session.login().to_string()),
            &transaction,
        ))?;

        Ok(outcome)
    }

    /// Set or replace a category budget
    pub fn set_budget(
        &self,
        session: &Session,
        category: Category,
        limit: Money,
    ) -> MoneyTrackResult<Budget> {
        let mut user = self.load(session)?;
        let previous = user.wallet().budget(&category).cloned();
        let budget = self
            .budgets
            .set_budget(user.wallet_mut(), category, limit);
        self.storage.users().update(&user)?;

        let name = Some(session.login().to_string());
        let entry = match &previous {
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                budget.category().name(),
                name,
                Some(before),
                &budget,
            ),
            None => AuditEntry::create(EntityType::Budget, budget.category().name(), name, &budget),
        };
        self.storage.log_audit(&entry)?;

        Ok(budget)
    }

    /// Move money to another user (or to oneself)
    pub fn transfer(
        &self,
        session: &Session,
        to_login: &str,
        amount: Money,
    ) -> MoneyTrackResult<TransferOutcome> {
        if !amount.is_positive() {
            return Err(MoneyTrackError::Validation(
                "Transfer amount must be positive".into(),
            ));
        }

        let plan = TransferPlan::new(amount);
        let (debit, credit) = (plan.debit_leg(), plan.credit_leg());

        let outcome = if to_login == session.login() {
            let mut user = self.load(session)?;
            check_room(user.wallet(), [&debit, &credit])?;
            let outcome = self.transfers.execute_within(&plan, user.wallet_mut());
            self.storage.users().update(&user)?;
            outcome
        } else {
            let mut recipient = self
                .storage
                .users()
                .find_by_login(to_login)?
                .ok_or_else(|| MoneyTrackError::user_not_found(to_login))?;
            let mut sender = self.load(session)?;
            check_room(sender.wallet(), [&debit])?;
            check_room(recipient.wallet(), [&credit])?;

            let outcome =
                self.transfers
                    .execute(&plan, sender.wallet_mut(), recipient.wallet_mut());
            self.storage.users().update(&sender)?;
            self.storage.users().update(&recipient)?;
            outcome
        };

        self.storage.log_audit(&AuditEntry::create(
            EntityType::Transfer,
            outcome.debit_transaction.id().as_uuid().to_string(),
            Some(session.login().to_string()),
            &json!({
                "from": session.login(),
                "to": to_login,
                "amount": amount,
                "debit": outcome.debit_transaction.id(),
                "credit": outcome.credit_transaction.id(),
            }),
        ))?;

        info!(from = session.login(), to = to_login, %amount, "transfer completed");
        Ok(outcome)
    }

    /// Snapshot of the session user's wallet
    pub fn wallet(&self, session: &Session) -> MoneyTrackResult<Wallet> {
        Ok(self.load(session)?.wallet().clone())
    }

    /// Current balance of the session user's wallet
    pub fn balance(&self, session: &Session) -> MoneyTrackResult<Money> {
        Ok(self.load(session)?.wallet().balance())
    }

    /// Total of one transaction type across the session user's wallet
    pub fn total(&self, session: &Session, transaction_type: TransactionType) -> MoneyTrackResult<Money> {
        let user = self.load(session)?;
        Ok(self.wallets.calculate_total(user.wallet(), transaction_type))
    }

    fn load(&self, session: &Session) -> MoneyTrackResult<User> {
        self.storage
            .users()
            .find_by_login(session.login())?
            .ok_or_else(|| MoneyTrackError::user_not_found(session.login()))
    }
}

/// Reject a recording that would push the balance or a per-type total out
/// of range; nothing is written in that case
fn check_room<'t>(
    wallet: &Wallet,
    transactions: impl IntoIterator<Item = &'t Transaction>,
) -> MoneyTrackResult<()> {
    if !wallet.can_record(transactions) {
        return Err(MoneyTrackError::Validation(
            "Amount is too large for this wallet".into(),
        ));
    }
    Ok(())
}

fn check_amount(amount: Money) -> MoneyTrackResult<()> {
    if amount.is_negative() {
        return Err(MoneyTrackError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}
