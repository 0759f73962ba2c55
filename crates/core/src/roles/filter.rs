use crate::session::SessionEvent;

use super::types::Role;

/// Projects the full event list down to the subset visible to a role.
///
/// Stateless and side-effect free; call it on every query so the projection
/// always reflects the latest store contents. The admin projection is the
/// identity: all events, same order. Teachers see the sessions attributed
/// to them, the student group sees the sessions scheduled for it. Events
/// without attribution (manual creations, stale-id placeholders) are only
/// visible to the admin viewer.
pub fn select_events(events: &[SessionEvent], role: Role) -> Vec<SessionEvent> {
    match role {
        Role::Admin => events.to_vec(),
        Role::NoviaYr1 => events
            .iter()
            .filter(|event| event.group.as_deref() == Some(role.as_str()))
            .cloned()
            .collect(),
        Role::TeacherEl | Role::TeacherBl => events
            .iter()
            .filter(|event| event.teacher.as_deref() == Some(role.as_str()))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn datetime(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_events() -> Vec<SessionEvent> {
        vec![
            SessionEvent::created(0, "Math", datetime(19, 8), datetime(19, 9))
                .with_teacher("EL")
                .with_group("NoviaYr1"),
            SessionEvent::created(1, "Physics", datetime(19, 10), datetime(19, 11))
                .with_teacher("BL")
                .with_group("NoviaYr1"),
            SessionEvent::created(2, "Biology", datetime(20, 8), datetime(20, 10))
                .with_teacher("EL")
                .with_group("NoviaYr2"),
            // ad-hoc event with no attribution
            SessionEvent::created(3, "Study group", datetime(20, 12), datetime(20, 13)),
        ]
    }

    #[test]
    fn test_admin_projection_is_identity() {
        let events = sample_events();
        let visible = select_events(&events, Role::Admin);
        assert_eq!(visible, events);
    }

    #[test]
    fn test_teacher_el_sees_exactly_their_sessions() {
        let events = sample_events();
        let visible = select_events(&events, Role::TeacherEl);

        let titles: Vec<_> = visible.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(titles, vec!["Math", "Biology"]);
    }

    #[test]
    fn test_teacher_bl_sees_exactly_their_sessions() {
        let events = sample_events();
        let visible = select_events(&events, Role::TeacherBl);

        let titles: Vec<_> = visible.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(titles, vec!["Physics"]);
    }

    #[test]
    fn test_group_filter_matches_group_not_teacher() {
        let events = sample_events();
        let visible = select_events(&events, Role::NoviaYr1);

        let titles: Vec<_> = visible.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(titles, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_unattributed_events_are_admin_only() {
        let events = sample_events();

        for role in [Role::TeacherEl, Role::TeacherBl, Role::NoviaYr1] {
            let visible = select_events(&events, role);
            assert!(visible.iter().all(|event| event.title != "Study group"));
        }
        assert!(select_events(&events, Role::Admin)
            .iter()
            .any(|event| event.title == "Study group"));
    }

    #[test]
    fn test_no_matches_yields_empty_list() {
        let events = vec![SessionEvent::created(0, "Math", datetime(19, 8), datetime(19, 9))
            .with_teacher("EL")
            .with_group("G1")];

        assert!(select_events(&events, Role::TeacherBl).is_empty());
        assert!(select_events(&events, Role::NoviaYr1).is_empty());
    }

    #[test]
    fn test_projection_reflects_latest_list() {
        let mut events = sample_events();
        assert_eq!(select_events(&events, Role::TeacherBl).len(), 1);

        events.push(
            SessionEvent::created(4, "Chemistry", datetime(21, 8), datetime(21, 9))
                .with_teacher("BL"),
        );
        assert_eq!(select_events(&events, Role::TeacherBl).len(), 2);
    }
}
