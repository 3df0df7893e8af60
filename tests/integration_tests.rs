// Integration tests for geopeek
//
// These tests walk the wizard through a complete session without the TUI
// or the network:
// - category and asset selection gate each transition
// - advancing from the asset step hands out the identify request
// - resolving the lookup lands on the result step
// - finishing restarts the wizard from a clean slate

use serde_json::json;

use geopeek::catalog::Asset;
use geopeek::geoadmin::{IdentifyRequest, InfoCategory};
use geopeek::wizard::{Advance, Wizard, WizardStep};

fn bern_depot() -> Asset {
    Asset {
        id: "AST-002".to_string(),
        name: "Bern Depot".to_string(),
        latitude: 46.95,
        longitude: 7.44,
        kind: "depot".to_string(),
    }
}

// =============================================================================
// Full Session
// =============================================================================

#[test]
fn test_complete_wizard_session() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.current_step(), WizardStep::SelectCategory);

    // Nothing chosen yet, so the first step holds
    assert!(matches!(wizard.advance(), Advance::Blocked));

    wizard.set_category(InfoCategory::PopulationDensity);
    assert!(matches!(
        wizard.advance(),
        Advance::Moved(WizardStep::SelectAsset)
    ));

    // No asset chosen yet, so the second step holds too
    assert!(matches!(wizard.advance(), Advance::Blocked));

    wizard.set_asset(bern_depot());
    let request = match wizard.advance() {
        Advance::Lookup(request) => request,
        other => panic!("expected a lookup, got {:?}", other),
    };

    // The wizard stays on the asset step until the worker reports back
    assert!(wizard.is_lookup_pending());
    assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
    assert_eq!(request.category, InfoCategory::PopulationDensity);
    assert_eq!(request.longitude, 7.44);
    assert_eq!(request.latitude, 46.95);

    wizard.resolve_lookup(json!({"results": [{"featureId": 42}]}));
    assert_eq!(wizard.current_step(), WizardStep::ShowResult);
    assert!(!wizard.is_lookup_pending());

    let pretty = wizard.result_pretty().expect("result should be present");
    assert!(pretty.contains("\"featureId\": 42"));
}

#[test]
fn test_finish_restarts_the_session() {
    let mut wizard = Wizard::new();
    wizard.set_category(InfoCategory::DroneRestriction);
    wizard.advance();
    wizard.set_asset(bern_depot());
    wizard.advance();
    wizard.resolve_lookup(json!({"results": []}));

    assert!(matches!(wizard.advance(), Advance::Restarted));
    assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
    assert!(wizard.category().is_none());
    assert!(wizard.selected_asset().is_none());
    assert!(wizard.result().is_none());
}

#[test]
fn test_back_from_result_keeps_the_document() {
    let mut wizard = Wizard::new();
    wizard.set_category(InfoCategory::PopulationDensity);
    wizard.advance();
    wizard.set_asset(bern_depot());
    wizard.advance();
    wizard.resolve_lookup(json!({"results": []}));

    wizard.retreat();
    assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
    assert!(wizard.result().is_some());

    // Advancing again fires a fresh lookup for the same selection
    assert!(matches!(wizard.advance(), Advance::Lookup(_)));
}

#[test]
fn test_pending_lookup_freezes_navigation() {
    let mut wizard = Wizard::new();
    wizard.set_category(InfoCategory::PopulationDensity);
    wizard.advance();
    wizard.set_asset(bern_depot());
    wizard.advance();
    assert!(wizard.is_lookup_pending());

    assert!(matches!(wizard.advance(), Advance::Blocked));
    wizard.retreat();
    assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
}

// =============================================================================
// Identify Request Wiring
// =============================================================================

#[test]
fn test_request_carries_asset_coordinates() {
    let category = InfoCategory::DroneRestriction;
    let request = IdentifyRequest::for_asset(category, &bern_depot());

    assert_eq!(request.longitude, 7.44);
    assert_eq!(request.latitude, 46.95);
    assert_eq!(request.geometry(), "{\"x\": 7.44, \"y\": 46.95}");
}

#[test]
fn test_identify_url_query_is_complete_and_ordered() {
    let request = IdentifyRequest {
        category: InfoCategory::DroneRestriction,
        longitude: 7.44,
        latitude: 46.95,
    };
    let url = request.url().expect("url should assemble");

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api3.geo.admin.ch"));
    assert_eq!(url.path(), "/rest/services/api/MapServer/identify");

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    let names: Vec<&str> = pairs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "layers",
            "geometryType",
            "sr",
            "lang",
            "returnGeometry",
            "tolerance",
            "geometry",
        ]
    );

    assert_eq!(pairs[0].1, "all:ch.bazl.einschraenkungen-drohnen");
    assert_eq!(pairs[1].1, "esriGeometryPoint");
    assert_eq!(pairs[2].1, "4326");
    assert_eq!(pairs[3].1, "en");
    assert_eq!(pairs[4].1, "false");
    assert_eq!(pairs[5].1, "0");
    assert_eq!(pairs[6].1, "{\"x\": 7.44, \"y\": 46.95}");
}

#[test]
fn test_each_category_maps_to_its_own_layer() {
    let population = IdentifyRequest {
        category: InfoCategory::PopulationDensity,
        longitude: 7.44,
        latitude: 46.95,
    };
    let drones = IdentifyRequest {
        category: InfoCategory::DroneRestriction,
        longitude: 7.44,
        latitude: 46.95,
    };

    let population_url = population.url().expect("url should assemble");
    let drone_url = drones.url().expect("url should assemble");
    assert_ne!(population_url, drone_url);
    assert!(
        population_url
            .as_str()
            .contains("volkszaehlung-bevoelkerungsstatistik_einwohner")
    );
}
