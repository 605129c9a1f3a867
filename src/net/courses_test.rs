use super::*;

/// Stub backend over a fixed dataset: slices by an opaque cursor that
/// encodes the next offset, the way the real backend mints continuation
/// keys. The client never looks inside the cursor.
fn stub_dataset(len: usize) -> Vec<Course> {
    (0..len)
        .map(|i| Course {
            id: format!("c-{i}"),
            title: format!("Course {i}"),
            ..Course::default()
        })
        .collect()
}

fn stub_fetch(dataset: &[Course], request: &Pagination) -> CoursePage {
    let start = request
        .last_evaluated_key
        .as_deref()
        .map_or(0, |key| key.strip_prefix("cursor@").and_then(|n| n.parse().ok()).expect("cursor minted by this stub"));
    let end = (start + request.per_page as usize).min(dataset.len());
    let cursor = (end < dataset.len()).then(|| format!("cursor@{end}"));
    CoursePage {
        courses: dataset[start..end].to_vec(),
        pagination: Pagination {
            page: request.page,
            per_page: request.per_page,
            last_evaluated_key: cursor,
        },
    }
}

#[test]
fn pagination_round_trip_covers_the_dataset_without_overlap() {
    let dataset = stub_dataset(25);
    let mut request = Pagination { page: 0, per_page: 10, last_evaluated_key: None };
    let mut seen: Vec<String> = Vec::new();
    let mut pages = 0;

    loop {
        let page = stub_fetch(&dataset, &request);
        pages += 1;

        for course in &page.courses {
            // Disjointness: no page may repeat an id from an earlier page.
            assert!(!seen.contains(&course.id), "duplicate {}", course.id);
            seen.push(course.id.clone());
        }

        match page.pagination.last_evaluated_key {
            Some(cursor) => {
                // The continuation cursor goes back verbatim.
                request = Pagination {
                    page: request.page + 1,
                    per_page: request.per_page,
                    last_evaluated_key: Some(cursor),
                };
            }
            None => break,
        }
    }

    assert_eq!(pages, 3);
    let all: Vec<String> = dataset.iter().map(|c| c.id.clone()).collect();
    assert_eq!(seen, all, "union of pages must equal the unpaginated set");
}

#[test]
fn absent_cursor_requests_the_first_page() {
    let dataset = stub_dataset(25);
    let first = stub_fetch(
        &dataset,
        &Pagination { page: 0, per_page: 10, last_evaluated_key: None },
    );
    assert_eq!(first.courses.first().map(|c| c.id.as_str()), Some("c-0"));
    assert_eq!(first.courses.len(), 10);
}

#[test]
fn final_page_comes_back_without_a_cursor() {
    let dataset = stub_dataset(25);
    let last = stub_fetch(
        &dataset,
        &Pagination { page: 2, per_page: 10, last_evaluated_key: Some("cursor@20".to_owned()) },
    );
    assert_eq!(last.courses.len(), 5);
    assert_eq!(last.pagination.last_evaluated_key, None);
}
