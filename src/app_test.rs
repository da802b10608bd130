use super::*;

#[test]
fn plan_follows_page_containers() {
    assert_eq!(PagePlan::new(true, false), PagePlan { load_statistics: true, poll_availability: false });
    assert_eq!(PagePlan::new(false, true), PagePlan { load_statistics: false, poll_availability: true });
    assert_eq!(PagePlan::new(false, false), PagePlan::default());
}

