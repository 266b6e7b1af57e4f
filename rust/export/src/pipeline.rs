// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One export, lot by lot
//!
//! Shared by both orchestrators: contexts and project first, then one
//! Site/Building/Storey with its elements per lot, then the project
//! aggregation and the layer assignments.

use crate::containment::{LayerBucket, LayerSet};
use crate::context::GeometricContexts;
use crate::elements::{building_mass, lot_surface, setback_lines, ElementScope};
use crate::error::{ExportError, Result};
use crate::hierarchy::{self, ProjectRefs};
use crate::options::ResolvedOptions;
use crate::properties::{lot_properties, mass_properties};
use crate::session::ExportSession;
use zoning_ifc_core::{EntityId, FileHeader};
use zoning_ifc_geometry::{lot_footprint, Vector2};
use zoning_ifc_model::{BuildingGeometry, LotSource};

/// A building mass to place on a lot
pub(crate) struct MassRequest {
    pub name: String,
    pub geometry: BuildingGeometry,
    pub bucket: LayerBucket,
}

/// Everything needed to export one lot
pub(crate) struct LotRequest<'a, L: LotSource + ?Sized> {
    pub lot: &'a L,
    pub site_name: String,
    pub building_name: String,
    /// Prefix for element names
    pub label: String,
    /// Lot center in world coordinates
    pub offset: Vector2<f64>,
    pub masses: Vec<MassRequest>,
}

pub(crate) struct DocumentBuilder {
    session: ExportSession,
    contexts: GeometricContexts,
    project: ProjectRefs,
    layers: LayerSet,
    sites: Vec<EntityId>,
    header: FileHeader,
    include_properties: bool,
}

impl DocumentBuilder {
    pub fn new(options: &ResolvedOptions) -> Self {
        let mut session = ExportSession::new(options.timestamp, options.guid_seed);
        let contexts = GeometricContexts::build(&mut session);
        let project = hierarchy::project(
            &mut session,
            &contexts,
            &options.project_name,
            &options.author,
            &options.organization,
        );

        let mut header = FileHeader::new(options.filename.clone(), options.timestamp);
        header.author = options.author.clone();
        header.organization = options.organization.clone();

        Self {
            session,
            contexts,
            project,
            layers: LayerSet::new(),
            sites: Vec::new(),
            header,
            include_properties: options.include_properties,
        }
    }

    /// Site, building, storey, elements and relationships of one lot
    pub fn add_lot<L: LotSource + ?Sized>(&mut self, request: LotRequest<'_, L>) -> Result<()> {
        tracing::debug!(
            lot = %request.site_name,
            offset_x = request.offset.x,
            offset_y = request.offset.y,
            "Placing lot"
        );

        let owner_history = self.project.owner_history;
        let session = &mut self.session;
        let contexts = &self.contexts;

        let footprint = lot_footprint(request.lot, request.offset);
        let site = hierarchy::site(session, contexts, owner_history, &footprint, &request.site_name);
        let building = hierarchy::building(session, contexts, owner_history, &site, &request.building_name);
        let storey = hierarchy::storey(session, contexts, owner_history, &building, 0.0);

        let scope = ElementScope {
            contexts,
            owner_history,
            storey: &storey,
            offset: request.offset,
        };

        let mut elements = Vec::with_capacity(2 + request.masses.len());
        let mut described_masses = Vec::new();

        let surface = lot_surface(
            session,
            &scope,
            request.lot,
            &format!("{} Lot Surface", request.label),
        )?;
        elements.push(surface.element);
        if let Some(rep) = surface.shape_rep {
            self.layers.add(LayerBucket::LotLines, rep);
        }

        let setbacks = setback_lines(
            session,
            &scope,
            request.lot,
            &format!("{} Setback Lines", request.label),
        )?;
        if let Some(out) = setbacks {
            elements.push(out.element);
            if let Some(rep) = out.shape_rep {
                self.layers.add(LayerBucket::SetbackLines, rep);
            }
        }

        for mass in &request.masses {
            let out = building_mass(session, &scope, &mass.geometry, &mass.name)?;
            elements.push(out.element);
            if let Some(rep) = out.shape_rep {
                self.layers.add(mass.bucket, rep);
                described_masses.push((out.element, mass.geometry));
            }
        }

        hierarchy::contain(session, owner_history, storey.id, &elements);
        hierarchy::aggregate(session, owner_history, building.id, &[storey.id]);
        hierarchy::aggregate(session, owner_history, site.id, &[building.id]);

        if self.include_properties {
            lot_properties(session, owner_history, site.id, request.lot);
            for (element, geometry) in &described_masses {
                mass_properties(session, owner_history, *element, geometry);
            }
        }

        self.sites.push(site.id);
        Ok(())
    }

    /// Aggregate the sites under the project, write the layers and render
    pub fn finish(mut self) -> Result<String> {
        if self.sites.is_empty() {
            return Err(ExportError::EmptyInput);
        }

        let owner_history = self.project.owner_history;
        hierarchy::aggregate(&mut self.session, owner_history, self.project.project, &self.sites);
        let layers = self.layers.emit(&mut self.session);

        tracing::info!(
            entities = self.session.store().len(),
            sites = self.sites.len(),
            layers = layers.len(),
            filename = %self.header.filename,
            "IFC export complete"
        );

        Ok(self.session.finish(&self.header))
    }
}
