use super::*;

#[test]
fn footer_groups_are_product_then_company() {
    let headings: Vec<_> = FOOTER_GROUPS.iter().map(|g| g.heading).collect();
    assert_eq!(headings, ["Product", "Company"]);
}

#[test]
fn every_footer_link_targets_a_known_route() {
    for group in FOOTER_GROUPS {
        for link in group.links {
            assert_eq!(SiteRoute::from_href(&link.href()), Ok(link.route), "{}", link.label);
        }
    }
}

#[test]
fn plain_link_href_is_route_path() {
    let features = FOOTER_GROUPS[0].links[0];
    assert_eq!(features.href(), "/features");
    assert_eq!(FOOTER_GROUPS[0].links[1].href(), SiteRoute::Download.path());
}

#[test]
fn team_link_is_about_fragment() {
    let team = FOOTER_GROUPS[1].links.iter().find(|l| l.label == "Team").copied();
    assert_eq!(team.map(|l| l.href()), Some("/about#team".to_owned()));
    assert_eq!(team.map(|l| l.route), Some(SiteRoute::About));
}
