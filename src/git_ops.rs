use anyhow::{Context, Result, anyhow};
use git2::{Repository, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const FALLBACK_NAME: &str = "Memopad";
const FALLBACK_EMAIL: &str = "memopad@localhost";

/// Keeps the inbox file in step with the git repository that contains it
///
/// All operations are no-ops when the inbox is not inside a repository.
pub struct GitSync {
    repo: Option<Mutex<Repository>>,
}

impl GitSync {
    /// Discover the repository enclosing `file_path`
    ///
    /// The inbox may not exist yet, so discovery starts from its directory.
    pub fn discover(file_path: &Path) -> Self {
        let start = match file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let repo = Repository::discover(&start).ok().map(Mutex::new);
        if repo.is_none() {
            tracing::debug!(path = %start.display(), "inbox is not inside a git repository");
        }
        Self { repo }
    }

    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    fn with_repo<T>(&self, op: impl FnOnce(&Repository) -> Result<T>) -> Result<Option<T>> {
        let Some(repo) = &self.repo else {
            return Ok(None);
        };
        let repo = repo
            .lock()
            .map_err(|_| anyhow!("Git repository lock poisoned"))?;
        op(&repo).map(Some)
    }

    /// Fast-forward the current branch from `origin`
    ///
    /// Diverged histories are reported as errors and left untouched.
    pub fn fast_forward(&self) -> Result<()> {
        self.with_repo(|repo| {
            let branch = current_branch(repo)?;
            let mut remote = repo
                .find_remote("origin")
                .context("Failed to find remote 'origin'")?;
            remote
                .fetch(&[&branch], None, None)
                .context("Failed to fetch from origin")?;

            let fetch_head = repo.find_reference("FETCH_HEAD")?;
            let incoming = repo.reference_to_annotated_commit(&fetch_head)?;
            let (analysis, _) = repo.merge_analysis(&[&incoming])?;

            if analysis.is_up_to_date() {
                return Ok(());
            }
            if !analysis.is_fast_forward() {
                return Err(anyhow!(
                    "Inbox branch '{}' has diverged from origin; resolve manually",
                    branch
                ));
            }

            let refname = format!("refs/heads/{}", branch);
            repo.find_reference(&refname)?
                .set_target(incoming.id(), "memopad: fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
            Ok(())
        })
        .map(|_| ())
    }

    /// Stage `file_path` and commit it on HEAD
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        self.with_repo(|repo| {
            let workdir = repo
                .workdir()
                .context("Repository has no working directory")?;
            let workdir = fs::canonicalize(workdir)?;
            let absolute = fs::canonicalize(file_path)
                .with_context(|| format!("Failed to resolve {}", file_path.display()))?;
            let relative = absolute
                .strip_prefix(&workdir)
                .context("Inbox file is not inside the repository")?;

            let mut index = repo.index()?;
            index.add_path(relative)?;
            index.write()?;
            let tree = repo.find_tree(index.write_tree()?)?;

            let parent = match repo.head() {
                Ok(head) => Some(head.peel_to_commit()?),
                Err(_) => None,
            };
            let parents: Vec<_> = parent.iter().collect();
            let signature = signature(repo)?;

            repo.commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )?;
            Ok(())
        })
        .map(|_| ())
    }

    /// Push the current branch to `origin`
    pub fn push(&self) -> Result<()> {
        self.with_repo(|repo| {
            let branch = current_branch(repo)?;
            let mut remote = repo
                .find_remote("origin")
                .context("Failed to find remote 'origin'")?;
            remote.push(&[&format!("refs/heads/{}", branch)], None)?;
            Ok(())
        })
        .map(|_| ())
    }
}

fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.head().context("Failed to get HEAD")?;
    head.shorthand()
        .map(str::to_string)
        .context("Failed to get branch name")
}

/// Committer identity from git config, with a fixed fallback
fn signature(repo: &Repository) -> Result<Signature<'static>> {
    let config = repo.config()?;
    let name = config
        .get_string("user.name")
        .unwrap_or_else(|_| FALLBACK_NAME.to_string());
    let email = config
        .get_string("user.email")
        .unwrap_or_else(|_| FALLBACK_EMAIL.to_string());

    Signature::now(&name, &email).or_else(|_| {
        // Some CI clocks make now() fail
        Signature::new(&name, &email, &Time::new(1_700_000_000, 0))
            .context("Failed to create git signature")
    })
}
