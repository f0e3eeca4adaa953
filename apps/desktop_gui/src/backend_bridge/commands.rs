//! Backend commands queued from UI to the delivery worker.

use contact::draft::ContactMessage;
use url::Url;

pub enum BackendCommand {
    SubmitContact { endpoint: Url, message: ContactMessage },
}
