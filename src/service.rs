use std::sync::Arc;

use chrono::NaiveDate;
use log::{info, warn};
use serde_json::json;
use uuid::Uuid;

use crate::clock::Clock;
use crate::domain::assignment::DailyAssignment;
use crate::domain::slot::AvailableSlot;
use crate::domain::surgery::{NewSurgery, Surgery, SurgeryUpdate};
use crate::error::{Error, Result};
use crate::scheduler;
use crate::store::{ActivityEntry, AssignmentStore};

/// An authenticated user of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

/// The caller's session. State-changing operations only check that a
/// current user exists; no further role is required.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn authenticated(user: User) -> Self {
        Session { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Session { user: None }
    }

    pub fn current_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(Error::Unauthorized)
    }
}

/// Request-level operations of the scheduling calendar.
///
/// Wraps a store with the waiting-list/calendar transitions, the surgery
/// and assignment maintenance operations, and the availability scan. The
/// write path is trusting: weekday and capacity rules are enforced by the
/// slot-picking flow, not re-checked here, so an administrative caller can
/// place a case anywhere.
#[derive(Debug)]
pub struct CalendarService<S: AssignmentStore> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: AssignmentStore> CalendarService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        CalendarService { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// See [`scheduler::find_available_dates`].
    pub fn find_available_dates(
        &self,
        room_id: Uuid,
        physician_id: Uuid,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<AvailableSlot>> {
        scheduler::find_available_dates(&self.store, &*self.clock, room_id, physician_id, patient_id)
    }

    // --- surgery lifecycle ---

    pub fn create_surgery(&mut self, session: &Session, new: NewSurgery) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let surgery = Surgery::create(new);
        self.store.insert_surgery(surgery.clone())?;

        info!("Surgery created for '{}' by {}", surgery.patient_name, user.username);
        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_created",
            json!({
                "surgery_id": surgery.id,
                "patient_name": surgery.patient_name,
                "surgery_date": surgery.surgery_date,
            }),
        ))?;

        Ok(surgery)
    }

    pub fn update_surgery(
        &mut self,
        session: &Session,
        surgery_id: Uuid,
        update: SurgeryUpdate,
    ) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let mut surgery = self.fetch_surgery(surgery_id)?;
        surgery.apply_update(update);
        self.store.update_surgery(surgery.clone())?;

        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_updated",
            json!({
                "surgery_id": surgery.id,
                "patient_name": surgery.patient_name,
            }),
        ))?;

        Ok(surgery)
    }

    pub fn delete_surgery(&mut self, session: &Session, surgery_id: Uuid) -> Result<()> {
        session.current_user()?;
        self.store.delete_surgery(surgery_id)
    }

    pub fn approve_surgery(&mut self, session: &Session, surgery_id: Uuid) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let mut surgery = self.fetch_surgery(surgery_id)?;
        surgery.is_approved = true;
        surgery.approved_by = Some(user.id);
        self.store.update_surgery(surgery.clone())?;

        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_approved",
            json!({ "surgery_id": surgery.id, "patient_name": surgery.patient_name }),
        ))?;

        Ok(surgery)
    }

    pub fn unapprove_surgery(&mut self, session: &Session, surgery_id: Uuid) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let mut surgery = self.fetch_surgery(surgery_id)?;
        surgery.is_approved = false;
        surgery.approved_by = None;
        self.store.update_surgery(surgery.clone())?;

        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_unapproved",
            json!({ "surgery_id": surgery.id, "patient_name": surgery.patient_name }),
        ))?;

        Ok(surgery)
    }

    // --- waiting-list / calendar transitions ---

    /// Takes the case off the calendar. Valid from any state; a case that
    /// is already waiting stays waiting.
    pub fn move_to_waiting_list(&mut self, session: &Session, surgery_id: Uuid) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let mut surgery = self.fetch_surgery(surgery_id)?;
        let old_room_id = surgery.room_id;
        let old_surgery_date = surgery.surgery_date;

        surgery.move_to_waiting();
        self.store.update_surgery(surgery.clone())?;

        info!("Surgery '{}' moved to the waiting list", surgery.patient_name);
        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_moved_to_waiting_list",
            json!({
                "surgery_id": surgery.id,
                "patient_name": surgery.patient_name,
                "old_room_id": old_room_id,
                "old_surgery_date": old_surgery_date,
            }),
        ))?;

        Ok(surgery)
    }

    /// Places the case on the calendar at the given room and date. The
    /// date is trusted as chosen by the caller (typically via the scan);
    /// no weekday or capacity check happens here.
    pub fn assign_from_waiting_list(
        &mut self,
        session: &Session,
        surgery_id: Uuid,
        room_id: Uuid,
        date: NaiveDate,
        physician_id: Option<Uuid>,
    ) -> Result<Surgery> {
        let user = session.current_user()?.clone();

        let mut surgery = self.fetch_surgery(surgery_id)?;
        surgery.schedule(room_id, date, physician_id);
        self.store.update_surgery(surgery.clone())?;

        info!(
            "Surgery '{}' assigned to room {} on {}",
            surgery.patient_name, room_id, date
        );
        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgery_assigned_from_waiting_list",
            json!({
                "surgery_id": surgery.id,
                "patient_name": surgery.patient_name,
                "room_id": room_id,
                "surgery_date": date,
                "physician_id": physician_id,
            }),
        ))?;

        Ok(surgery)
    }

    /// Moves every scheduled surgery dated in the given month back to the
    /// waiting list and returns how many were moved. Cases already waiting
    /// are untouched and not counted. Irreversible; the caller is expected
    /// to have confirmed the action.
    pub fn bulk_move_to_waiting_list_by_month(
        &mut self,
        session: &Session,
        year: i32,
        month: u32,
    ) -> Result<usize> {
        let user = session.current_user()?.clone();

        let (start, end) = month_bounds(year, month)?;
        let surgeries = self.store.scheduled_surgeries_between(start, end)?;

        if surgeries.is_empty() {
            info!("Bulk move for {}-{:02}: no scheduled surgeries found", year, month);
            return Ok(0);
        }

        warn!(
            "Bulk moving {} surgeries dated {}-{:02} to the waiting list",
            surgeries.len(),
            year,
            month
        );

        let count = surgeries.len();
        let patient_names: Vec<String> = surgeries.iter().map(|s| s.patient_name.clone()).collect();

        for mut surgery in surgeries {
            surgery.move_to_waiting();
            self.store.update_surgery(surgery)?;
        }

        self.store.record_activity(ActivityEntry::new(
            user.id,
            "surgeries_bulk_moved_to_waiting_list",
            json!({
                "year": year,
                "month": month,
                "count": count,
                "patient_names": patient_names,
            }),
        ))?;

        Ok(count)
    }

    // --- daily assignment maintenance ---

    /// Assigns the physician to the room for the date, displacing any
    /// physician previously assigned there that day.
    pub fn assign_physician(
        &mut self,
        session: &Session,
        room_id: Uuid,
        physician_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyAssignment> {
        session.current_user()?;

        let assignment = self
            .store
            .replace_assignment(DailyAssignment::new(room_id, physician_id, date))?;

        Ok(assignment)
    }

    pub fn remove_assignment(&mut self, session: &Session, assignment_id: Uuid) -> Result<()> {
        session.current_user()?;
        self.store.delete_assignment(assignment_id)
    }

    fn fetch_surgery(&self, surgery_id: Uuid) -> Result<Surgery> {
        self.store
            .surgery(surgery_id)?
            .ok_or_else(|| Error::SurgeryNotFound(surgery_id.to_string()))
    }
}

/// First and last day of a calendar month, boundary inclusive.
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidRecord(format!("invalid month {}-{}", year, month)))?;

    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| Error::InvalidRecord(format!("invalid month {}-{}", year, month)))?;

    let end = first_of_next.pred_opt().unwrap_or(start);

    Ok((start, end))
}
