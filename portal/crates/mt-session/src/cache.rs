use crate::error::{Result as SessionResult, SessionError};

use mt_core::{Identity, Role, UserRecord};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

/// Last-known user record for one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    pub record: UserRecord,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    schema_version: u32,
    #[serde(default)]
    users: BTreeMap<String, CachedUser>,
}

/// Advisory mirror of role and user record, keyed by identity id.
///
/// Only ever a placeholder until the backend answers; authoritative
/// responses overwrite it. With a path, every write is persisted
/// atomically; without one it lives in memory only.
#[derive(Debug)]
pub struct LocalCache {
    path: Option<PathBuf>,
    users: Mutex<BTreeMap<String, CachedUser>>,
}

impl LocalCache {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            users: Mutex::new(BTreeMap::new()),
        }
    }

    /// Open a file-backed cache.
    ///
    /// A missing file is an empty cache. A corrupted file is logged and
    /// treated as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();

        let users = if path.exists() {
            let contents =
                fs::read_to_string(&path).map_err(|e| SessionError::cache_read(path.clone(), e))?;

            match serde_json::from_str::<CacheFile>(&contents) {
                Ok(file) => {
                    debug!(
                        "Loaded session cache {path:?}: {} user(s), schema v{}",
                        file.users.len(),
                        file.schema_version
                    );
                    file.users
                }
                Err(e) => {
                    warn!("Session cache corrupted at {path:?}, starting empty: {e}");
                    BTreeMap::new()
                }
            }
        } else {
            info!("No session cache at {path:?}");
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            users: Mutex::new(users),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn role(&self, identity_id: &str) -> Option<Role> {
        self.lock().get(identity_id).map(|u| u.record.role)
    }

    pub fn user(&self, identity_id: &str) -> Option<CachedUser> {
        self.lock().get(identity_id).cloned()
    }

    /// Record what the backend just told us about an identity.
    ///
    /// `verified: None` keeps the previously cached flag.
    pub fn remember(
        &self,
        identity: &Identity,
        role: Role,
        verified: Option<bool>,
    ) -> SessionResult<()> {
        let mut users = self.lock();

        let previous_verified = users
            .get(&identity.id)
            .map(|u| u.record.verified)
            .unwrap_or(false);

        users.insert(
            identity.id.clone(),
            CachedUser {
                record: UserRecord {
                    external_id: identity.id.clone(),
                    email: identity.email.clone(),
                    name: identity.name.clone(),
                    role,
                    verified: verified.unwrap_or(previous_verified),
                },
                updated_at: Utc::now(),
            },
        );

        self.persist(&users)
    }

    /// Update only the verification flag of an already cached user.
    pub fn remember_verified(&self, identity_id: &str, verified: bool) -> SessionResult<()> {
        let mut users = self.lock();

        let Some(user) = users.get_mut(identity_id) else {
            return Ok(());
        };
        user.record.verified = verified;
        user.updated_at = Utc::now();

        self.persist(&users)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, CachedUser>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write temp file, fsync, then rename over the cache file.
    fn persist(&self, users: &BTreeMap<String, CachedUser>) -> SessionResult<()> {
        let Some(ref final_path) = self.path else {
            return Ok(());
        };

        if let Some(dir) = final_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let file = CacheFile {
            schema_version: SCHEMA_VERSION,
            users: users.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let mut temp_name = final_path.as_os_str().to_owned();
        temp_name.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp_name);

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Saved session cache {final_path:?}");
        Ok(())
    }
}
