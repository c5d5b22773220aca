//! # Builtin Vertical Table
//!
//! The compiled-in configuration for every canonical vertical. The match in
//! [`config_for`] is exhaustive, so a new `Vertical` variant does not build
//! until it has a configuration here.

use serde_json::{json, Value};
use vertex_core::{Vertical, Vocabulary};

use crate::config::{ColorScheme, IconPair, ModuleId, VerticalConfig};

const JSON_SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Builtin configuration for `vertical`.
pub fn config_for(vertical: Vertical) -> VerticalConfig {
    match vertical {
        Vertical::Restaurant => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Plat",
                "Réservation",
                "Client",
                "Service",
                "Table",
                "Équipe",
                "Salle",
            ]),
            icons: IconPair::new("utensils", "chef-hat"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "table_number": { "type": "integer", "minimum": 1 },
                    "covers": { "type": "integer", "minimum": 1 },
                    "dietary_notes": { "type": "array", "items": { "type": "string" } },
                    "occasion": { "type": "string" },
                    "seating": { "enum": ["indoor", "terrace", "bar"] }
                }),
            ),
            available_modules: vec![ModuleId::Kds, ModuleId::TableManager, ModuleId::MenuEditor],
            color_scheme: ColorScheme::Amber,
            neon_glow: "#f59e0b".to_string(),
        },
        Vertical::Beauty => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Soin",
                "Rendez-vous",
                "Cliente",
                "Séance",
                "Cabine",
                "Esthéticienne",
                "Institut",
            ]),
            icons: IconPair::new("scissors", "sparkles"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "treatment": { "type": "string" },
                    "duration_minutes": { "type": "integer", "minimum": 5 },
                    "products": { "type": "array", "items": { "type": "string" } },
                    "skin_type": { "enum": ["dry", "oily", "combination", "sensitive", "normal"] },
                    "allergies": { "type": "string" }
                }),
            ),
            available_modules: vec![ModuleId::LoyaltyCards, ModuleId::Gallery],
            color_scheme: ColorScheme::Rose,
            neon_glow: "#f43f5e".to_string(),
        },
        Vertical::Fitness => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Cours",
                "Inscription",
                "Membre",
                "Séance",
                "Équipement",
                "Coach",
                "Studio",
            ]),
            icons: IconPair::new("dumbbell", "activity"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "class_type": { "type": "string" },
                    "level": { "enum": ["beginner", "intermediate", "advanced"] },
                    "coach": { "type": "string" },
                    "equipment": { "type": "array", "items": { "type": "string" } },
                    "capacity": { "type": "integer", "minimum": 1 }
                }),
            ),
            available_modules: vec![ModuleId::ClassScheduler, ModuleId::MembershipCards],
            color_scheme: ColorScheme::Lime,
            neon_glow: "#84cc16".to_string(),
        },
        Vertical::Medical => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Consultation",
                "Rendez-vous",
                "Patient",
                "Consultation",
                "Salle d'examen",
                "Praticien",
                "Cabinet",
            ]),
            icons: IconPair::new("stethoscope", "heart-pulse"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "urgency": { "enum": ["low", "normal", "high", "emergency"] },
                    "symptoms": { "type": "string" },
                    "patient_age": { "type": "integer", "minimum": 0, "maximum": 150 },
                    "first_visit": { "type": "boolean" },
                    "insurance": {
                        "type": "object",
                        "properties": {
                            "provider": { "type": "string" },
                            "policy_number": { "type": "string" }
                        }
                    }
                }),
            ),
            available_modules: vec![ModuleId::PatientRecords, ModuleId::Teleconsultation],
            color_scheme: ColorScheme::Sky,
            neon_glow: "#0ea5e9".to_string(),
        },
        Vertical::Legal => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Prestation",
                "Rendez-vous",
                "Dossier client",
                "Consultation",
                "Salle de réunion",
                "Avocat",
                "Cabinet",
            ]),
            icons: IconPair::new("scale", "briefcase"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "case_type": { "type": "string" },
                    "case_reference": { "type": "string" },
                    "opposing_party": { "type": "string" },
                    "confidential": { "type": "boolean" },
                    "hourly_rate": { "type": "number", "minimum": 0 },
                    "documents": { "type": "array", "items": { "type": "string" } }
                }),
            ),
            available_modules: vec![ModuleId::CaseFiles, ModuleId::TimeTracking],
            color_scheme: ColorScheme::Indigo,
            neon_glow: "#6366f1".to_string(),
        },
        Vertical::RealEstate => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Bien",
                "Visite",
                "Acquéreur",
                "Visite",
                "Bien",
                "Agent",
                "Agence",
            ]),
            icons: IconPair::new("home", "key"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "property_type": { "enum": ["apartment", "house", "commercial", "land"] },
                    "address": { "type": "string" },
                    "surface_m2": { "type": "number", "minimum": 0 },
                    "budget": { "type": "number", "minimum": 0 },
                    "visit_type": { "enum": ["physical", "virtual"] }
                }),
            ),
            available_modules: vec![ModuleId::PropertyListings, ModuleId::VisitPlanner],
            color_scheme: ColorScheme::Emerald,
            neon_glow: "#10b981".to_string(),
        },
        Vertical::Automotive => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Réparation",
                "Prise en charge",
                "Client",
                "Rendez-vous atelier",
                "Pont",
                "Mécanicien",
                "Garage",
            ]),
            icons: IconPair::new("wrench", "car"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "vehicle_brand": { "type": "string" },
                    "vehicle_model": { "type": "string" },
                    "license_plate": { "type": "string", "minLength": 1 },
                    "mileage": { "type": "integer", "minimum": 0 },
                    "estimated_cost": { "type": "number", "minimum": 0 },
                    "status": { "enum": ["waiting", "workshop", "ready"] },
                    "repairs": { "type": "array", "items": { "type": "string" } }
                }),
            ),
            available_modules: vec![ModuleId::WorkshopBoard, ModuleId::PartsInventory],
            color_scheme: ColorScheme::Orange,
            neon_glow: "#f97316".to_string(),
        },
        Vertical::Trades => VerticalConfig {
            vertical,
            vocabulary: vocabulary([
                "Intervention",
                "Demande",
                "Client",
                "Intervention",
                "Véhicule",
                "Technicien",
                "Zone",
            ]),
            icons: IconPair::new("hammer", "truck"),
            metadata_schema: metadata_schema(
                vertical,
                json!({
                    "job_type": { "type": "string" },
                    "address": { "type": "string" },
                    "estimated_cost": { "type": "number", "minimum": 0 },
                    "materials": { "type": "array", "items": { "type": "string" } },
                    "priority": { "enum": ["low", "normal", "urgent"] },
                    "site_access": {
                        "type": "object",
                        "properties": {
                            "code": { "type": "string" },
                            "floor": { "type": "integer" }
                        }
                    }
                }),
            ),
            available_modules: vec![ModuleId::DispatchMap, ModuleId::QuoteBuilder],
            color_scheme: ColorScheme::Yellow,
            neon_glow: "#eab308".to_string(),
        },
    }
}

/// Terms in [`vertex_core::ServiceKey::all`] order.
fn vocabulary(terms: [&str; 7]) -> Vocabulary {
    let [service, booking, client, appointment, resource, staff, location] = terms;
    Vocabulary {
        service: service.to_string(),
        booking: booking.to_string(),
        client: client.to_string(),
        appointment: appointment.to_string(),
        resource: resource.to_string(),
        staff: staff.to_string(),
        location: location.to_string(),
    }
}

/// Open object schema: no required properties, unknown properties allowed.
fn metadata_schema(vertical: Vertical, properties: Value) -> Value {
    json!({
        "$schema": JSON_SCHEMA_DRAFT,
        "title": format!("{vertical} record metadata"),
        "type": "object",
        "properties": properties,
        "additionalProperties": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_core::{ServiceKey, SERVICE_KEY_COUNT};

    #[test]
    fn test_every_vertical_configures_itself() {
        for vertical in Vertical::all() {
            assert_eq!(config_for(*vertical).vertical, *vertical);
        }
    }

    #[test]
    fn test_vocabularies_complete() {
        for vertical in Vertical::all() {
            let config = config_for(*vertical);
            assert_eq!(config.vocabulary.entries().count(), SERVICE_KEY_COUNT);
            assert!(
                config.vocabulary.blank_keys().is_empty(),
                "{vertical} has blank terms"
            );
        }
    }

    #[test]
    fn test_automotive_service_term() {
        assert_eq!(
            config_for(Vertical::Automotive).term(ServiceKey::Service),
            "Réparation"
        );
    }

    #[test]
    fn test_schemas_are_open_objects() {
        for vertical in Vertical::all() {
            let schema = config_for(*vertical).metadata_schema;
            assert_eq!(schema["type"], "object");
            assert_eq!(schema["additionalProperties"], true);
            assert!(schema.get("required").is_none(), "{vertical} requires fields");
        }
    }

    #[test]
    fn test_automotive_schema_fields() {
        let config = config_for(Vertical::Automotive);
        let fields = config.metadata_fields();
        for field in ["vehicle_brand", "license_plate", "estimated_cost", "status"] {
            assert!(fields.contains(&field), "missing {field}");
        }
        assert_eq!(
            config.metadata_schema["properties"]["status"]["enum"],
            json!(["waiting", "workshop", "ready"])
        );
    }

    #[test]
    fn test_medical_schema_fields() {
        let fields = config_for(Vertical::Medical).metadata_fields().join(",");
        assert!(fields.contains("urgency"));
        assert!(fields.contains("symptoms"));
    }

    #[test]
    fn test_modules() {
        assert!(config_for(Vertical::Restaurant).has_module(ModuleId::Kds));
        assert!(config_for(Vertical::Restaurant).has_module(ModuleId::TableManager));
        assert!(config_for(Vertical::Trades).has_module(ModuleId::DispatchMap));
        assert!(!config_for(Vertical::Legal).has_module(ModuleId::Kds));
    }
}
