//! Pick one department uniformly at random.
//!
//! The store only offers `count` and `get_at_offset`, so the pick is a count
//! followed by an offset fetch. No lock or snapshot spans the two calls: other
//! writers may shrink the collection in between, in which case the fetch comes
//! back empty and the pick reports `NotFound`. Nothing is retried here.

use std::sync::Arc;

use departments_domain::Department;

use crate::infrastructure::ports::{DepartmentRepo, RandomPort, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum RandomPickError {
    /// The collection was empty, or the drawn offset was gone by fetch time.
    #[error("No department to pick")]
    NotFound,
    /// The store could not answer.
    #[error("Department store unavailable: {0}")]
    Unavailable(#[from] RepoError),
}

pub struct RandomDepartment {
    departments: Arc<dyn DepartmentRepo>,
    random: Arc<dyn RandomPort>,
}

impl RandomDepartment {
    pub fn new(departments: Arc<dyn DepartmentRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            departments,
            random,
        }
    }

    /// Each department has probability `1/n` of being picked, where `n` is the
    /// count observed at the start of the call.
    pub async fn execute(&self) -> Result<Department, RandomPickError> {
        let count = self.departments.count().await?;
        if count == 0 {
            return Err(RandomPickError::NotFound);
        }

        // Clamp so a misbehaving random port can never push the offset past the count.
        let offset = self.random.gen_index(count).min(count - 1);

        match self.departments.get_at_offset(offset).await? {
            Some(department) => Ok(department),
            None => {
                tracing::debug!(
                    count,
                    offset,
                    "Departments shrank between count and fetch"
                );
                Err(RandomPickError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::Utc;
    use departments_domain::{Department, DepartmentId, DepartmentName};
    use mockall::predicate::eq;

    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SystemRandom};
    use crate::infrastructure::ports::{MockDepartmentRepo, MockRandomPort};
    use crate::test_fixtures::InMemoryDepartmentRepo;

    fn department(name: &str) -> Department {
        Department::new(
            DepartmentId::new(),
            DepartmentName::new(name).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn empty_collection_is_not_found_without_fetching() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_get_at_offset().never();

        let mut random = MockRandomPort::new();
        random.expect_gen_index().never();

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(random));
        assert!(matches!(pick.execute().await, Err(RandomPickError::NotFound)));
    }

    #[tokio::test]
    async fn single_department_is_always_picked_at_offset_zero() {
        let only = department("Finance");
        let expected = only.clone();

        let mut repo = MockDepartmentRepo::new();
        repo.expect_count().returning(|| Ok(1));
        repo.expect_get_at_offset()
            .with(eq(0_u64))
            .times(20)
            .returning(move |_| Ok(Some(only.clone())));

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(SystemRandom::new()));
        for _ in 0..20 {
            assert_eq!(pick.execute().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn shrink_to_empty_between_count_and_fetch_is_not_found() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_count().times(1).returning(|| Ok(3));
        repo.expect_get_at_offset().times(1).returning(|_| Ok(None));

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(FixedRandom(2)));
        assert!(matches!(pick.execute().await, Err(RandomPickError::NotFound)));
    }

    #[tokio::test]
    async fn count_failure_is_unavailable() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_count()
            .returning(|| Err(RepoError::database("count_departments", "connection refused")));
        repo.expect_get_at_offset().never();

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(FixedRandom(0)));
        let err = pick.execute().await.unwrap_err();
        assert!(matches!(err, RandomPickError::Unavailable(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn fetch_failure_is_unavailable() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_count().returning(|| Ok(5));
        repo.expect_get_at_offset()
            .returning(|_| Err(RepoError::database("get_department_at_offset", "timeout")));

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(FixedRandom(4)));
        assert!(matches!(
            pick.execute().await,
            Err(RandomPickError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn offset_stays_below_count() {
        for n in [1_u64, 2, 5, 17] {
            let mut repo = MockDepartmentRepo::new();
            repo.expect_count().returning(move || Ok(n));
            repo.expect_get_at_offset()
                .withf(move |offset| *offset < n)
                .returning(|_| Ok(Some(department("Any"))));

            let pick = RandomDepartment::new(Arc::new(repo), Arc::new(SystemRandom::new()));
            for _ in 0..200 {
                pick.execute().await.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn out_of_range_draw_is_clamped_to_last_offset() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_count().returning(|| Ok(4));
        repo.expect_get_at_offset()
            .with(eq(3_u64))
            .times(1)
            .returning(|_| Ok(Some(department("Last"))));

        let pick = RandomDepartment::new(Arc::new(repo), Arc::new(FixedRandom(4)));
        assert_eq!(pick.execute().await.unwrap().name().as_str(), "Last");
    }

    fn seeded_repo(n: usize) -> (Arc<InMemoryDepartmentRepo>, Vec<DepartmentId>) {
        let departments: Vec<Department> =
            (0..n).map(|i| department(&format!("Dept {i}"))).collect();
        let ids = departments.iter().map(Department::id).collect();
        (Arc::new(InMemoryDepartmentRepo::with(departments)), ids)
    }

    fn assert_roughly_uniform(
        hits: &HashMap<DepartmentId, u32>,
        ids: &[DepartmentId],
        draws: u32,
    ) {
        let expected = f64::from(draws) / ids.len() as f64;
        // Binomial sd is ~40 for 10k draws over 5 slots; 300 is far outside noise.
        let tolerance = 300.0;
        for id in ids {
            let observed = f64::from(hits.get(id).copied().unwrap_or(0));
            assert!(
                (observed - expected).abs() < tolerance,
                "department {id} picked {observed} times, expected about {expected}"
            );
        }
    }

    #[tokio::test]
    async fn picks_are_roughly_uniform() {
        let (repo, ids) = seeded_repo(5);
        let pick = RandomDepartment::new(repo, Arc::new(SystemRandom::new()));

        let draws = 10_000;
        let mut hits: HashMap<DepartmentId, u32> = HashMap::new();
        for _ in 0..draws {
            let dep = pick.execute().await.unwrap();
            *hits.entry(dep.id()).or_default() += 1;
        }

        assert_eq!(hits.len(), ids.len());
        assert_roughly_uniform(&hits, &ids, draws);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_picks_are_independently_uniform() {
        let (repo, ids) = seeded_repo(5);
        let pick = Arc::new(RandomDepartment::new(repo, Arc::new(SystemRandom::new())));

        let draws = 10_000;
        let mut handles = Vec::new();
        for _ in 0..4 {
            let pick = pick.clone();
            handles.push(tokio::spawn(async move {
                let mut hits: HashMap<DepartmentId, u32> = HashMap::new();
                for _ in 0..draws {
                    let dep = pick.execute().await.unwrap();
                    *hits.entry(dep.id()).or_default() += 1;
                }
                hits
            }));
        }

        for handle in handles {
            let hits = handle.await.unwrap();
            assert_roughly_uniform(&hits, &ids, draws);
        }
    }
}
