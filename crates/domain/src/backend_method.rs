use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Remote backend method names, normalized to lower-case.
///
/// Only `initialize`, `list` and `lookup` are served; every other name is
/// recognized so it can be audited, then answered as unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    AbortTransaction,
    ActivateDomainKey,
    AddDomainKey,
    CalculateSoaSerial,
    CommitTransaction,
    CreateSlaveDomain,
    DeactivateDomainKey,
    DirectBackendCmd,
    FeedEnts,
    FeedEnts3,
    FeedRecord,
    GetAllDomainMetadata,
    GetAllDomains,
    GetBeforeAndAfterNamesAbsolute,
    GetDomainInfo,
    GetDomainKeys,
    GetDomainMetadata,
    GetTsigKey,
    Initialize,
    IsMaster,
    List,
    Lookup,
    RemoveDomainKey,
    ReplaceRrSet,
    SearchRecords,
    SetDomainMetadata,
    SetNotified,
    StartTransaction,
    SuperMasterBackend,
    Unknown(String),
}

static KNOWN_METHODS: [(&str, Method); 29] = [
    ("aborttransaction", Method::AbortTransaction),
    ("activatedomainkey", Method::ActivateDomainKey),
    ("adddomainkey", Method::AddDomainKey),
    ("calculatesoaserial", Method::CalculateSoaSerial),
    ("committransaction", Method::CommitTransaction),
    ("createslavedomain", Method::CreateSlaveDomain),
    ("deactivatedomainkey", Method::DeactivateDomainKey),
    ("directbackendcmd", Method::DirectBackendCmd),
    ("feedents", Method::FeedEnts),
    ("feedents3", Method::FeedEnts3),
    ("feedrecord", Method::FeedRecord),
    ("getalldomainmetadata", Method::GetAllDomainMetadata),
    ("getalldomains", Method::GetAllDomains),
    (
        "getbeforeandafternamesabsolute",
        Method::GetBeforeAndAfterNamesAbsolute,
    ),
    ("getdomaininfo", Method::GetDomainInfo),
    ("getdomainkeys", Method::GetDomainKeys),
    ("getdomainmetadata", Method::GetDomainMetadata),
    ("gettsigkey", Method::GetTsigKey),
    ("initialize", Method::Initialize),
    ("ismaster", Method::IsMaster),
    ("list", Method::List),
    ("lookup", Method::Lookup),
    ("removedomainkey", Method::RemoveDomainKey),
    ("replacerrset", Method::ReplaceRrSet),
    ("searchrecords", Method::SearchRecords),
    ("setdomainmetadata", Method::SetDomainMetadata),
    ("setnotified", Method::SetNotified),
    ("starttransaction", Method::StartTransaction),
    ("supermasterbackend", Method::SuperMasterBackend),
];

impl Method {
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        KNOWN_METHODS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, method)| method.clone())
            .unwrap_or(Method::Unknown(normalized))
    }

    pub fn as_str(&self) -> &str {
        if let Method::Unknown(name) = self {
            return name;
        }
        KNOWN_METHODS
            .iter()
            .find(|(_, method)| method == self)
            .map(|(known, _)| *known)
            .unwrap_or_default()
    }

    /// True for names that belong to the remote backend protocol, whether
    /// or not this backend serves them.
    pub fn is_known(&self) -> bool {
        !matches!(self, Method::Unknown(_))
    }

    pub fn is_served(&self) -> bool {
        matches!(self, Method::Initialize | Method::List | Method::Lookup)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Method::from_name(&name))
    }
}
