//! In-memory object store for command tests

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use s3tools_core::{
    DeleteReceipt, Error, ObjectDownload, ObjectStore, PutOptions, PutReceipt, RemotePath, Result,
    StorageClass, UploadSource,
};

#[derive(Default)]
pub(crate) struct MemoryStore {
    objects: Mutex<HashMap<RemotePath, (Vec<u8>, StorageClass)>>,
}

impl MemoryStore {
    pub(crate) fn with_object(path: &str, data: &[u8]) -> Self {
        let store = Self::default();
        store.objects.lock().unwrap().insert(
            path.parse().unwrap(),
            (data.to_vec(), StorageClass::Standard),
        );
        store
    }

    pub(crate) fn object(&self, path: &str) -> Option<(Vec<u8>, StorageClass)> {
        let path: RemotePath = path.parse().unwrap();
        self.objects.lock().unwrap().get(&path).cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_object(&self, path: &RemotePath) -> Result<ObjectDownload> {
        let (data, _) = self
            .objects
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::remote("download", path, "NoSuchKey"))?;

        Ok(ObjectDownload {
            content_length: Some(data.len() as u64),
            body: Box::pin(Cursor::new(data)),
        })
    }

    async fn put_object(
        &self,
        path: &RemotePath,
        source: UploadSource,
        options: PutOptions,
    ) -> Result<PutReceipt> {
        let data = std::fs::read(&source.path).map_err(|e| Error::local_io(&source.path, e))?;
        self.objects
            .lock()
            .unwrap()
            .insert(path.clone(), (data, options.storage_class));

        Ok(PutReceipt {
            location: format!("memory://{}/{}", path.bucket, path.key),
            ..Default::default()
        })
    }

    async fn delete_object(&self, path: &RemotePath) -> Result<DeleteReceipt> {
        self.objects
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| DeleteReceipt::default())
            .ok_or_else(|| Error::remote("remove", path, "NoSuchKey"))
    }
}
