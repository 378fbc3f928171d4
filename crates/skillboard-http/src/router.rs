//! Routing table for the skill API

use skillboard_api::{Ack, SkillCount, SkillDraft, SkillUpdate};
use skillboard_core::{ServiceError, SkillService};
use skillboard_util::SkillId;
use tracing::error;

use crate::{Method, Request, Response};

const MSG_ADDED: &str = "Skill added successfully";
const MSG_UPDATED: &str = "Skill updated successfully";
const MSG_DELETED: &str = "Skill deleted successfully";

/// Dispatch one request against the service.
pub fn route(service: &SkillService, request: &Request) -> Response {
    let segments = request.segments();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match segments.as_slice() {
        ["api", "skills"] => match request.method {
            Method::Get => list_skills(service),
            Method::Post => create_skill(service, &request.body),
            _ => method_not_allowed(),
        },

        ["api", "skills", id] => match id.parse::<i64>() {
            Ok(id) => {
                let id = SkillId::new(id);
                match request.method {
                    Method::Put => update_skill(service, id, &request.body),
                    Method::Delete => delete_skill(service, id),
                    _ => method_not_allowed(),
                }
            }
            // Non-integer id segments fall outside the route entirely
            Err(_) => not_found(),
        },

        ["api", "search", fragment] if !fragment.is_empty() => match request.method {
            Method::Get => search_skills(service, fragment),
            _ => method_not_allowed(),
        },

        ["api", "count"] => match request.method {
            Method::Get => count_skills(service),
            _ => method_not_allowed(),
        },

        _ => not_found(),
    }
}

fn list_skills(service: &SkillService) -> Response {
    match service.list_all() {
        Ok(records) => Response::json(&records),
        Err(e) => service_error(e),
    }
}

fn create_skill(service: &SkillService, body: &[u8]) -> Response {
    let draft: SkillDraft = match serde_json::from_slice(body) {
        Ok(draft) => draft,
        Err(_) => return invalid_body(),
    };

    match service.create(&draft) {
        Ok(_) => Response::json(&Ack::new(MSG_ADDED)),
        Err(e) => service_error(e),
    }
}

fn update_skill(service: &SkillService, id: SkillId, body: &[u8]) -> Response {
    let update: SkillUpdate = match serde_json::from_slice(body) {
        Ok(update) => update,
        Err(_) => return invalid_body(),
    };

    match service.update(id, &update) {
        Ok(()) => Response::json(&Ack::new(MSG_UPDATED)),
        Err(e) => service_error(e),
    }
}

fn delete_skill(service: &SkillService, id: SkillId) -> Response {
    match service.delete(id) {
        Ok(()) => Response::json(&Ack::new(MSG_DELETED)),
        Err(e) => service_error(e),
    }
}

fn search_skills(service: &SkillService, fragment: &str) -> Response {
    match service.search(fragment) {
        Ok(records) => Response::json(&records),
        Err(e) => service_error(e),
    }
}

fn count_skills(service: &SkillService) -> Response {
    match service.count() {
        Ok(total_skills) => Response::json(&SkillCount { total_skills }),
        Err(e) => service_error(e),
    }
}

fn service_error(e: ServiceError) -> Response {
    match e {
        ServiceError::Validation(message) => Response::error(400, message),
        ServiceError::Store(e) => {
            error!(error = %e, "Store failure while handling request");
            Response::error(500, "Internal server error")
        }
    }
}

fn invalid_body() -> Response {
    Response::error(400, "Invalid request body")
}

fn not_found() -> Response {
    Response::error(404, "Not found")
}

fn method_not_allowed() -> Response {
    Response::error(405, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboard_api::SkillRecord;
    use skillboard_store::SqliteStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn make_service() -> (TempDir, SkillService) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("skills.db")).unwrap();
        (dir, SkillService::new(Arc::new(store)))
    }

    fn request(method: Method, path: &str, body: &str) -> Request {
        Request {
            method,
            path: path.to_string(),
            keep_alive: true,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn get_skills_empty() {
        let (_dir, service) = make_service();
        let response = route(&service, &request(Method::Get, "/api/skills", ""));

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "[]");
    }

    #[test]
    fn post_then_get_roundtrip() {
        let (_dir, service) = make_service();

        let response = route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Alice","skill":"Go","level":"Intermediate"}"#,
            ),
        );
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), r#"{"message":"Skill added successfully"}"#);

        let response = route(&service, &request(Method::Get, "/api/skills", ""));
        let records: Vec<SkillRecord> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
    }

    #[test]
    fn post_missing_field_is_validation_error() {
        let (_dir, service) = make_service();

        let response = route(
            &service,
            &request(Method::Post, "/api/skills", r#"{"name":"Alice"}"#),
        );
        assert_eq!(response.status(), 400);
        assert_eq!(response.body(), r#"{"error":"All fields are required"}"#);
    }

    #[test]
    fn post_unparseable_body_is_bad_request() {
        let (_dir, service) = make_service();

        let response = route(&service, &request(Method::Post, "/api/skills", "not json"));
        assert_eq!(response.status(), 400);
        assert_eq!(response.body(), r#"{"error":"Invalid request body"}"#);
    }

    #[test]
    fn put_updates_record() {
        let (_dir, service) = make_service();
        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Alice","skill":"Go","level":"Intermediate"}"#,
            ),
        );

        let response = route(
            &service,
            &request(
                Method::Put,
                "/api/skills/1",
                r#"{"name":"Alice","skill":"Golang","level":"Advanced"}"#,
            ),
        );
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.body(),
            r#"{"message":"Skill updated successfully"}"#
        );

        let response = route(&service, &request(Method::Get, "/api/skills", ""));
        let records: Vec<SkillRecord> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(records[0].skill, "Golang");
    }

    #[test]
    fn put_missing_field_is_bad_request() {
        let (_dir, service) = make_service();

        let response = route(
            &service,
            &request(Method::Put, "/api/skills/1", r#"{"name":"Alice"}"#),
        );
        assert_eq!(response.status(), 400);
        assert_eq!(response.body(), r#"{"error":"Invalid request body"}"#);
    }

    #[test]
    fn put_absent_id_still_succeeds() {
        let (_dir, service) = make_service();

        let response = route(
            &service,
            &request(
                Method::Put,
                "/api/skills/999",
                r#"{"name":"A","skill":"B","level":"C"}"#,
            ),
        );
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn delete_is_idempotent_over_http() {
        let (_dir, service) = make_service();
        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Alice","skill":"Go","level":"Intermediate"}"#,
            ),
        );

        for _ in 0..2 {
            let response = route(&service, &request(Method::Delete, "/api/skills/1", ""));
            assert_eq!(response.status(), 200);
            assert_eq!(
                response.body(),
                r#"{"message":"Skill deleted successfully"}"#
            );
        }
    }

    #[test]
    fn search_returns_matches() {
        let (_dir, service) = make_service();
        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Alice","skill":"Golang","level":"Advanced"}"#,
            ),
        );
        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Bob","skill":"Rust","level":"Beginner"}"#,
            ),
        );

        let response = route(&service, &request(Method::Get, "/api/search/Go", ""));
        let records: Vec<SkillRecord> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].skill, "Golang");
    }

    #[test]
    fn search_decodes_percent_escapes() {
        let (_dir, service) = make_service();
        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Carol","skill":"machine learning","level":"Expert"}"#,
            ),
        );

        let response = route(
            &service,
            &request(Method::Get, "/api/search/machine%20learning", ""),
        );
        let records: Vec<SkillRecord> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn count_reflects_store() {
        let (_dir, service) = make_service();

        let response = route(&service, &request(Method::Get, "/api/count", ""));
        assert_eq!(response.body(), r#"{"total_skills":0}"#);

        route(
            &service,
            &request(
                Method::Post,
                "/api/skills",
                r#"{"name":"Alice","skill":"Go","level":"Intermediate"}"#,
            ),
        );

        let response = route(&service, &request(Method::Get, "/api/count", ""));
        assert_eq!(response.body(), r#"{"total_skills":1}"#);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let (_dir, service) = make_service();

        let response = route(&service, &request(Method::Get, "/api/unknown", ""));
        assert_eq!(response.status(), 404);

        let response = route(&service, &request(Method::Get, "/", ""));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn non_integer_id_is_not_found() {
        let (_dir, service) = make_service();
        let response = route(&service, &request(Method::Delete, "/api/skills/abc", ""));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn empty_search_fragment_is_not_found() {
        let (_dir, service) = make_service();
        let response = route(&service, &request(Method::Get, "/api/search/", ""));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn wrong_method_is_rejected() {
        let (_dir, service) = make_service();

        let response = route(&service, &request(Method::Delete, "/api/skills", ""));
        assert_eq!(response.status(), 405);

        let response = route(&service, &request(Method::Post, "/api/count", ""));
        assert_eq!(response.status(), 405);
    }
}
