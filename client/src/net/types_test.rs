use super::*;

// =============================================================
// Job decoding
// =============================================================

#[test]
fn job_decodes_storage_shaped_record() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": 7,
        "job_title": "Backend Engineer",
        "company_name": "Acme",
        "location": "Remote",
        "experience_level": "",
        "job_type": null,
        "posted_date": "2 days ago",
        "source_platform": "LinkedIn",
        "job_url": "https://example.test/jobs/7",
        "is_new": 1,
        "job_hash": "ignored",
        "created_at": "2024-01-01 00:00:00"
    }))
    .unwrap();

    assert_eq!(job.id, 7);
    assert_eq!(job.location.as_deref(), Some("Remote"));
    assert_eq!(job.experience_level, None);
    assert_eq!(job.job_type, None);
    assert_eq!(job.posted_date.as_deref(), Some("2 days ago"));
    assert!(job.is_new);
}

#[test]
fn job_accepts_boolean_and_zero_new_flag() {
    let base = serde_json::json!({
        "id": 1,
        "job_title": "t",
        "company_name": "c",
        "source_platform": "Indeed",
        "job_url": "https://example.test"
    });

    let mut with_bool = base.clone();
    with_bool["is_new"] = serde_json::json!(true);
    assert!(serde_json::from_value::<Job>(with_bool).unwrap().is_new);

    let mut with_zero = base.clone();
    with_zero["is_new"] = serde_json::json!(0);
    assert!(!serde_json::from_value::<Job>(with_zero).unwrap().is_new);

    assert!(!serde_json::from_value::<Job>(base).unwrap().is_new);
}

#[test]
fn job_accepts_integral_float_id() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": 12.0,
        "job_title": "t",
        "company_name": "c",
        "source_platform": "Naukri",
        "job_url": "https://example.test"
    }))
    .unwrap();
    assert_eq!(job.id, 12);
}

// =============================================================
// decode_jobs
// =============================================================

#[test]
fn decode_jobs_skips_malformed_records() {
    let payload = serde_json::json!({
        "count": 4,
        "jobs": [
            { "id": 1, "job_title": "A", "company_name": "X", "source_platform": "LinkedIn", "job_url": "https://a" },
            { "job_title": "missing id", "company_name": "X", "source_platform": "LinkedIn", "job_url": "https://b" },
            { "id": "3", "job_title": "string id", "company_name": "X", "source_platform": "Indeed", "job_url": "https://c" },
            { "id": 4, "job_title": "D", "company_name": "Y", "source_platform": "Indeed", "job_url": "https://d" }
        ]
    });

    let decoded = decode_jobs(payload).unwrap();
    assert_eq!(decoded.skipped, 2);
    assert_eq!(decoded.jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn decode_jobs_preserves_backend_order() {
    let payload = serde_json::json!({
        "jobs": [
            { "id": 9, "job_title": "A", "company_name": "X", "source_platform": "LinkedIn", "job_url": "https://a" },
            { "id": 2, "job_title": "B", "company_name": "X", "source_platform": "LinkedIn", "job_url": "https://b" }
        ]
    });
    let decoded = decode_jobs(payload).unwrap();
    assert_eq!(decoded.jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![9, 2]);
    assert_eq!(decoded.skipped, 0);
}

#[test]
fn decode_jobs_rejects_payload_without_jobs_array() {
    assert!(matches!(decode_jobs(serde_json::json!({ "count": 0 })), Err(ApiError::Decode(_))));
    assert!(matches!(decode_jobs(serde_json::json!({ "jobs": "none" })), Err(ApiError::Decode(_))));
    assert!(matches!(decode_jobs(serde_json::json!([1, 2])), Err(ApiError::Decode(_))));
}

// =============================================================
// Stats / scrape
// =============================================================

#[test]
fn stats_defaults_missing_fields() {
    let stats: Stats = serde_json::from_value(serde_json::json!({ "total_jobs": 12 })).unwrap();
    assert_eq!(stats.total_jobs, 12);
    assert_eq!(stats.new_jobs, 0);
    assert!(stats.platform_counts.is_empty());
}

#[test]
fn stats_reads_platform_counts() {
    let stats: Stats = serde_json::from_value(serde_json::json!({
        "total_jobs": 3,
        "new_jobs": 1,
        "platform_counts": { "Indeed": 1, "LinkedIn": 2 }
    }))
    .unwrap();
    assert_eq!(stats.platform_counts.get("LinkedIn"), Some(&2));
}

#[test]
fn scrape_response_reads_count() {
    let resp: ScrapeResponse =
        serde_json::from_value(serde_json::json!({ "message": "Scraping completed", "new_jobs_count": 3 })).unwrap();
    assert_eq!(resp.new_jobs_count, 3);
}
