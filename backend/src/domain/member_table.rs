//! Member table domain logic.
//!
//! Converts raw member DTOs into formatted table rows and implements the
//! two read paths over the ledger: the simple Paid/Pending table and the
//! tabbed Active/Pending/Inactive manage view. Pure presentation-adjacent
//! logic with no UI framework dependency.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{FormattedMember, Member, PaymentStatus, StatusTab};

use crate::domain::payment_status;

/// Configuration for member table display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberTableConfig {
    pub show_currency_symbol: bool,
    pub date_format: DateFormat,
}

/// Date formatting options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    MonthDayYear, // "June 13, 2025"
    ShortDate,    // "06/13/2025"
    Iso,          // "2025-06-13"
}

impl Default for MemberTableConfig {
    fn default() -> Self {
        Self {
            show_currency_symbol: true,
            date_format: DateFormat::MonthDayYear,
        }
    }
}

/// Member table service that handles all table-related business logic.
#[derive(Clone)]
pub struct MemberTableService {
    config: MemberTableConfig,
}

impl MemberTableService {
    /// Create a new MemberTableService with default configuration.
    pub fn new() -> Self {
        Self {
            config: MemberTableConfig::default(),
        }
    }

    /// Create a new MemberTableService with custom configuration.
    pub fn with_config(config: MemberTableConfig) -> Self {
        Self { config }
    }

    /// Format a list of members for table display, preserving order.
    pub fn format_members_for_table(&self, members: &[Member]) -> Vec<FormattedMember> {
        self.format_members_for_table_at(members, Utc::now())
    }

    /// Format a list of members with an explicit "now" for status derivation.
    pub fn format_members_for_table_at(
        &self,
        members: &[Member],
        now: DateTime<Utc>,
    ) -> Vec<FormattedMember> {
        members
            .iter()
            .map(|member| self.format_single_member_at(member, now))
            .collect()
    }

    /// Format a single member row.
    pub fn format_single_member_at(&self, member: &Member, now: DateTime<Utc>) -> FormattedMember {
        let status = self.member_status_at(member, now);
        FormattedMember {
            id: member.id.clone(),
            name: member.name.clone(),
            member_number: member.member_number,
            formatted_visit_date: self.format_date(&member.visit_date),
            formatted_last_paid: self.format_date(&member.last_paid_at),
            formatted_amount: self.format_amount(member.amount),
            status_label: status.label().to_string(),
            status_css_class: self.status_css_class(status).to_string(),
            status,
        }
    }

    /// Derive the two-class status of a member at `now`.
    ///
    /// An unparseable last-paid timestamp counts as just paid; the table
    /// never refuses to render a row.
    pub fn member_status_at(&self, member: &Member, now: DateTime<Utc>) -> PaymentStatus {
        match member.last_paid_at_parsed() {
            Some(last_paid) => payment_status::classify_at(last_paid.with_timezone(&Utc), now),
            None => PaymentStatus::Paid,
        }
    }

    /// Filter members for one tab of the manage view.
    ///
    /// Active and Pending partition the ledger; Inactive always comes back
    /// empty because its predicate matches no member.
    pub fn filter_members_for_tab(&self, members: &[Member], tab: StatusTab) -> Vec<Member> {
        self.filter_members_for_tab_at(members, tab, Utc::now())
    }

    /// Tab filtering with an explicit "now" for status derivation.
    pub fn filter_members_for_tab_at(
        &self,
        members: &[Member],
        tab: StatusTab,
        now: DateTime<Utc>,
    ) -> Vec<Member> {
        members
            .iter()
            .filter(|member| match member.last_paid_at_parsed() {
                Some(last_paid) => {
                    payment_status::matches_tab_at(last_paid.with_timezone(&Utc), tab, now)
                }
                None => false,
            })
            .cloned()
            .collect()
    }

    /// Format a date for display based on configuration.
    ///
    /// Accepts both plain ISO dates and RFC 3339 timestamps; falls back to
    /// the original string when parsing fails.
    pub fn format_date(&self, date_str: &str) -> String {
        match self.parse_date(date_str) {
            Some(date) => match self.config.date_format {
                DateFormat::MonthDayYear => date.format("%B %-d, %Y").to_string(),
                DateFormat::ShortDate => date.format("%m/%d/%Y").to_string(),
                DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
            },
            None => date_str.to_string(),
        }
    }

    /// Format a registration amount for display, e.g. "$500.00".
    pub fn format_amount(&self, amount: u32) -> String {
        let currency = if self.config.show_currency_symbol { "$" } else { "" };
        format!("{}{:.2}", currency, amount as f64)
    }

    /// Styling hint for the status cell.
    pub fn status_css_class(&self, status: PaymentStatus) -> &'static str {
        match status {
            PaymentStatus::Paid => "status paid",
            PaymentStatus::Pending => "status pending",
        }
    }

    fn parse_date(&self, date_str: &str) -> Option<NaiveDate> {
        let date_part = date_str.split('T').next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

impl Default for MemberTableService {
    fn default() -> Self {
        Self::new()
    }
}
