use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use std::path::Path;

/// A throwaway repository with one commit on `develop`
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
    pub head: Oid,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("develop");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();

        let sig = Signature::now("Release Bot", "release@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let head = {
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
                .unwrap()
        };

        Fixture { dir, repo, head }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn set_release_prefix(&self, prefix: &str) {
        self.repo
            .config()
            .unwrap()
            .set_str("gitflow.prefix.release", prefix)
            .unwrap();
    }

    pub fn create_branch(&self, name: &str) {
        let commit = self.repo.find_commit(self.head).unwrap();
        self.repo.branch(name, &commit, false).unwrap();
    }

    pub fn checkout(&self, name: &str) {
        self.repo.set_head(&format!("refs/heads/{}", name)).unwrap();
    }

    pub fn tag(&self, name: &str) {
        let object = self.repo.find_object(self.head, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }
}
