//! CDS reannotation orchestrator: refines coding genes by homology search
//! against an ordered list of reference databases.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::data_structs::annotation::AnnotationSet;
use crate::data_structs::enums::Kingdom;
use crate::error::{Error, Result};
use crate::tools::ToolRegistry;

/// The UniRef reference databases, tiered from best-curated to catch-all.
const UNIREF_STEMS: [&str; 11] = [
    "uniref100_Swiss-Prot_Bacteria",
    "uniref100_Swiss-Prot_Archaea",
    "uniref100_Swiss-Prot_Viruses",
    "uniref100_Swiss-Prot_Eukaryota",
    "uniref100_Swiss-Prot_other",
    "uniref100_TrEMBL_Bacteria",
    "uniref100_TrEMBL_Archaea",
    "uniref100_TrEMBL_Viruses",
    "uniref100_TrEMBL_Eukaryota",
    "uniref100_TrEMBL_other",
    "uniref100__other",
];

fn default_orders() -> HashMap<Kingdom, Vec<usize>> {
    HashMap::from([
        (Kingdom::Bacteria, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
        (Kingdom::Archaea, vec![1, 0, 2, 3, 4, 6, 5, 7, 8, 9, 10]),
        (Kingdom::Viruses, vec![2, 0, 1, 3, 4, 7, 5, 6, 8, 9, 10]),
    ])
}

/// Catalog of reference protein databases under one root directory.
///
/// The database list and the per-kingdom orderings are explicit data: a
/// kingdom permutes the search order but never changes the set.
/// [`DbCatalog::new`] carries the UniRef defaults;
/// [`DbCatalog::with_databases`] overrides both.
#[derive(Debug, Clone)]
pub struct DbCatalog {
    root:   PathBuf,
    names:  Vec<String>,
    orders: HashMap<Kingdom, Vec<usize>>,
}

impl DbCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_databases(
            root,
            UNIREF_STEMS.iter().map(|s| s.to_string()).collect(),
            default_orders(),
        )
    }

    pub fn with_databases(
        root: impl Into<PathBuf>,
        names: Vec<String>,
        orders: HashMap<Kingdom, Vec<usize>>,
    ) -> Self {
        Self {
            root: root.into(),
            names,
            orders,
        }
    }

    pub fn stems(&self) -> &[String] {
        &self.names
    }

    /// Database stems in the search order for `kingdom`. A kingdom without
    /// an ordering, or an ordering pointing past the database list, is a
    /// configuration error.
    pub fn ordered(
        &self,
        kingdom: Kingdom,
    ) -> Result<Vec<PathBuf>> {
        let order = self.orders.get(&kingdom).ok_or_else(|| {
            Error::Configuration(format!(
                "no database ordering defined for kingdom `{}`",
                kingdom
            ))
        })?;
        order
            .iter()
            .map(|&i| {
                self.names
                    .get(i)
                    .map(|name| self.root.join(name))
                    .ok_or_else(|| {
                        Error::Configuration(format!(
                            "database ordering for `{}` references unknown index {}",
                            kingdom, i
                        ))
                    })
            })
            .collect()
    }
}

/// Searches the translations of unannotated CDS features against the
/// catalog databases in kingdom order, attaching a `db_xref` to every
/// feature with a hit. Returns how many features were resolved.
///
/// Features that already carry a `db_xref` are left alone, so rerunning on
/// a fully-annotated set performs no search at all. Only the first enabled
/// search tool in `tools` runs.
pub fn reannotate_cds(
    set: &mut AnnotationSet,
    kingdom: Kingdom,
    tools: &IndexMap<String, String>,
    registry: &ToolRegistry,
    catalog: &DbCatalog,
    workdir: &Path,
) -> Result<usize> {
    let mut remaining: IndexMap<String, String> = IndexMap::new();
    for (id, feature) in set.filter(|f| f.is_cds()) {
        if feature.attributes().db_xref.is_some() {
            continue;
        }
        match &feature.attributes().translation {
            Some(translation) => {
                remaining.insert(id.to_string(), translation.clone());
            },
            None => warn!("CDS {} has no translation and cannot be searched", id),
        }
    }
    if remaining.is_empty() {
        debug!("no unannotated CDS features; skipping homology search");
        return Ok(0);
    }

    let (tool_name, target) = match tools.first() {
        Some(entry) => entry,
        None => return Ok(0),
    };
    if tools.len() > 1 {
        warn!(
            "multiple search tools configured; only `{}` will run",
            tool_name
        );
    }
    if target != "uniref" {
        return Err(Error::Configuration(format!(
            "unknown database target `{}` for search tool `{}`",
            target, tool_name
        )));
    }
    let tool = registry.searcher(tool_name)?;

    let mut resolved: Vec<(String, String)> = Vec::new();
    for stem in catalog.ordered(kingdom)? {
        if remaining.is_empty() {
            break;
        }
        if !tool.database_exists(&stem) {
            debug!("database {} not present; skipped", stem.display());
            continue;
        }

        let mut pool = tempfile::Builder::new()
            .prefix("pool-")
            .suffix(".faa")
            .tempfile_in(workdir)?;
        {
            let mut writer = bio::io::fasta::Writer::new(&mut pool);
            for (id, translation) in &remaining {
                writer.write(id, None, translation.as_bytes())?;
            }
            writer.flush()?;
        }

        let output = tool.search(pool.path(), &stem, workdir)?;
        for hit in tool.parse(&output)? {
            if remaining.shift_remove(&hit.query).is_some() {
                resolved.push((hit.query, hit.subject));
            }
            else {
                warn!(
                    "search hit for unknown or already-resolved query {}; ignored",
                    hit.query
                );
            }
        }
    }

    let count = resolved.len();
    for (id, subject) in resolved {
        if let Some(feature) = set.get(&id) {
            let mut updated = feature.clone();
            updated.attributes_mut().db_xref = Some(subject);
            set.replace(&id, updated)?;
        }
    }
    info!(
        "resolved {} of {} CDS features by homology",
        count,
        count + remaining.len()
    );
    Ok(count)
}
