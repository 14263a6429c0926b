use crate::dispatch::NodeWriter;
use crate::error::Result;
use crate::wire::WriteLen;
use plancodec_types::{
    Agg, Append, Flow, FunctionScan, Hash, HashJoin, IndexScan, JoinInfo, Limit, Material,
    MergeJoin, Motion, NestLoop, NodeTag, PlanInfo, PlannedStmt, ResultPlan, ScanInfo, SeqScan,
    SetOp, Slice, SliceTable, Sort, SubqueryScan, Unique, ValuesScan, Window, WindowKey,
};

/* Shared prefixes. */
impl NodeWriter<'_> {
    pub(crate) fn write_plan_info(&mut self, plan: &PlanInfo) -> Result<WriteLen> {
        let mut w_len = WriteLen::default();
        let variable = self.cx().writes_variable_fields();

        if variable {
            w_len += self.write_scalar(plan.plan_node_id);
            w_len += self.write_scalar(plan.plan_parent_node_id);

            w_len += self.write_float(plan.startup_cost);
            w_len += self.write_float(plan.total_cost);
            w_len += self.write_float(plan.plan_rows);
            w_len += self.write_scalar(plan.plan_width);
        }

        w_len += self.write_list(plan.targetlist.as_ref())?;
        w_len += self.write_list(plan.qual.as_ref())?;

        w_len += self.write_bitmapset(plan.ext_param.as_ref())?;
        w_len += self.write_bitmapset(plan.all_param.as_ref())?;

        w_len += self.write_scalar(plan.n_param_exec);

        if variable {
            w_len += self.write_child(&plan.flow)?;
            w_len += self.write_enum_int(plan.dispatch);
            w_len += self.write_bool(plan.direct_dispatch.is_direct_dispatch);
            w_len += self.write_list(plan.direct_dispatch.content_ids.as_ref())?;

            w_len += self.write_scalar(plan.n_motion_nodes);
            w_len += self.write_scalar(plan.n_init_plans);

            w_len += self.write_child(&plan.slice_table)?;
        }

        w_len += self.write_child(&plan.lefttree)?;
        w_len += self.write_child(&plan.righttree)?;
        w_len += self.write_list(plan.init_plan.as_ref())?;

        if variable {
            w_len += self.write_scalar(plan.operator_mem_kb);
        }

        Ok(w_len)
    }

    /// Cache-stripped with a range table, a relation scan is identified by its relation OID
    /// rather than by its position in the range table.
    pub(crate) fn write_scan_info(&mut self, scan: &ScanInfo) -> Result<WriteLen> {
        let mut w_len = self.write_plan_info(&scan.plan)?;
        let scanrel = self
            .cx()
            .stable_relid(scan.scanrelid)
            .unwrap_or(scan.scanrelid);
        w_len += self.write_scalar(scanrel);
        w_len += self.write_scalar(scan.part_index);
        w_len += self.write_scalar(scan.part_index_printable);
        Ok(w_len)
    }

    pub(crate) fn write_join_info(&mut self, join: &JoinInfo) -> Result<WriteLen> {
        let mut w_len = self.write_plan_info(&join.plan)?;
        w_len += self.write_bool(join.prefetch_inner);
        w_len += self.write_enum(join.jointype);
        w_len += self.write_list(join.joinqual.as_ref())?;
        Ok(w_len)
    }
}

/* Statement root. */
impl NodeWriter<'_> {
    pub(crate) fn write_planned_stmt(&mut self, node: &PlannedStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::PlannedStmt);

        w_len += self.write_enum(node.command_type);
        w_len += self.write_enum(node.plan_gen);
        w_len += self.write_bool(node.can_set_tag);
        w_len += self.write_bool(node.transient_plan);

        w_len += self.write_child(&node.plan_tree)?;
        w_len += self.write_list(node.rtable.as_ref())?;

        w_len += self.write_list(node.result_relations.as_ref())?;
        w_len += self.write_child(&node.utility_stmt)?;
        w_len += self.write_child(&node.into_clause)?;
        w_len += self.write_list(node.subplans.as_ref())?;
        w_len += self.write_bitmapset(node.rewind_plan_ids.as_ref())?;
        w_len += self.write_list(node.returning_lists.as_ref())?;

        w_len += self.write_child(&node.result_partitions)?;
        w_len += self.write_list(node.result_aosegnos.as_ref())?;
        w_len += self.write_list(node.query_part_oids.as_ref())?;
        w_len += self.write_list(node.query_parts_metadata.as_ref())?;
        w_len += self.write_list(node.num_selectors_per_scan_id.as_ref())?;
        w_len += self.write_list(node.row_marks.as_ref())?;
        w_len += self.write_list(node.relation_oids.as_ref())?;
        w_len += self.write_list(node.inval_items.as_ref())?;
        w_len += self.write_scalar(node.n_cross_level_params);
        w_len += self.write_scalar(node.n_motion_nodes);
        w_len += self.write_scalar(node.n_init_plans);

        w_len += self.write_child(&node.slice_table)?;

        w_len += self.write_scalar(node.query_mem);
        w_len += self.write_list(node.transient_type_records.as_ref())?;

        Ok(w_len)
    }
}

/* Operators. */
impl NodeWriter<'_> {
    pub(crate) fn write_result(&mut self, node: &ResultPlan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Result);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_child(&node.resconstantqual)?;
        w_len += self.write_bool(node.hash_filter);
        w_len += self.write_list(node.hash_list.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_append(&mut self, node: &Append) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Append);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_list(node.appendplans.as_ref())?;
        w_len += self.write_bool(node.is_target);
        w_len += self.write_bool(node.is_zapped);
        w_len += self.write_bool(node.has_xslice);
        Ok(w_len)
    }

    pub(crate) fn write_seq_scan(&mut self, node: &SeqScan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SeqScan);
        w_len += self.write_scan_info(&node.scan)?;
        Ok(w_len)
    }

    pub(crate) fn write_index_scan(&mut self, node: &IndexScan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::IndexScan);
        w_len += self.write_scan_info(&node.scan)?;
        w_len += self.write_scalar(node.indexid);
        w_len += self.write_list(node.indexqual.as_ref())?;
        w_len += self.write_list(node.indexqualorig.as_ref())?;
        w_len += self.write_list(node.indexstrategy.as_ref())?;
        w_len += self.write_list(node.indexsubtype.as_ref())?;
        w_len += self.write_enum(node.indexorderdir);
        Ok(w_len)
    }

    pub(crate) fn write_subquery_scan(&mut self, node: &SubqueryScan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SubqueryScan);
        w_len += self.write_scan_info(&node.scan)?;
        w_len += self.write_child(&node.subplan)?;
        Ok(w_len)
    }

    pub(crate) fn write_function_scan(&mut self, node: &FunctionScan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::FunctionScan);
        w_len += self.write_scan_info(&node.scan)?;
        Ok(w_len)
    }

    pub(crate) fn write_values_scan(&mut self, node: &ValuesScan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::ValuesScan);
        w_len += self.write_scan_info(&node.scan)?;
        w_len += self.write_list(node.values_lists.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_nest_loop(&mut self, node: &NestLoop) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::NestLoop);
        w_len += self.write_join_info(&node.join)?;
        w_len += self.write_bool(node.outernotreferencedbyinner);
        w_len += self.write_bool(node.shared_outer);
        w_len += self.write_bool(node.singleton_outer);
        Ok(w_len)
    }

    pub(crate) fn write_merge_join(&mut self, node: &MergeJoin) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::MergeJoin);
        w_len += self.write_join_info(&node.join)?;
        w_len += self.write_list(node.mergeclauses.as_ref())?;
        w_len += self.write_bool(node.unique_outer);
        Ok(w_len)
    }

    pub(crate) fn write_hash_join(&mut self, node: &HashJoin) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::HashJoin);
        w_len += self.write_join_info(&node.join)?;
        w_len += self.write_list(node.hashclauses.as_ref())?;
        w_len += self.write_list(node.hashqualclauses.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_hash(&mut self, node: &Hash) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Hash);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_bool(node.rescannable);
        Ok(w_len)
    }

    pub(crate) fn write_material(&mut self, node: &Material) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Material);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_bool(node.cdb_strict);
        w_len += self.write_enum(node.share_type);
        w_len += self.write_scalar(node.share_id);
        w_len += self.write_scalar(node.driver_slice);
        w_len += self.write_scalar(node.nsharer);
        w_len += self.write_scalar(node.nsharer_xslice);
        Ok(w_len)
    }

    pub(crate) fn write_sort(&mut self, node: &Sort) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Sort);
        w_len += self.write_plan_info(&node.plan)?;

        w_len += self.write_shared_count(
            "sort columns",
            &[node.sort_col_idx.len(), node.sort_operators.len()],
        )?;
        w_len += self.write_array(&node.sort_col_idx);
        w_len += self.write_array(&node.sort_operators);

        w_len += self.write_child(&node.limit_offset)?;
        w_len += self.write_child(&node.limit_count)?;
        w_len += self.write_bool(node.noduplicates);

        w_len += self.write_enum(node.share_type);
        w_len += self.write_scalar(node.share_id);
        w_len += self.write_scalar(node.driver_slice);
        w_len += self.write_scalar(node.nsharer);
        w_len += self.write_scalar(node.nsharer_xslice);
        Ok(w_len)
    }

    pub(crate) fn write_agg(&mut self, node: &Agg) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Agg);
        w_len += self.write_plan_info(&node.plan)?;

        w_len += self.write_enum(node.aggstrategy);
        w_len += self.write_count("grouping columns", &node.grp_col_idx)?;
        w_len += self.write_array(&node.grp_col_idx);

        if self.cx().writes_variable_fields() {
            w_len += self.write_scalar(node.num_groups);
            w_len += self.write_scalar(node.trans_space);
        }
        w_len += self.write_scalar(node.num_null_cols);
        w_len += self.write_scalar(node.input_grouping);
        w_len += self.write_scalar(node.grouping);
        w_len += self.write_bool(node.input_has_grouping);
        w_len += self.write_scalar(node.rollup_gs_times);
        w_len += self.write_bool(node.last_agg);
        w_len += self.write_bool(node.streaming);
        Ok(w_len)
    }

    pub(crate) fn write_window_key(&mut self, node: &WindowKey) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::WindowKey);
        w_len += self.write_shared_count(
            "window sort columns",
            &[node.sort_col_idx.len(), node.sort_operators.len()],
        )?;
        w_len += self.write_array(&node.sort_col_idx);
        w_len += self.write_array(&node.sort_operators);
        w_len += self.write_child(&node.frame)?;
        Ok(w_len)
    }

    pub(crate) fn write_window(&mut self, node: &Window) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Window);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_count("partition columns", &node.part_col_idx)?;
        w_len += self.write_array(&node.part_col_idx);
        w_len += self.write_list(node.window_keys.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_unique(&mut self, node: &Unique) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Unique);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_count("unique columns", &node.uniq_col_idx)?;
        w_len += self.write_array(&node.uniq_col_idx);
        Ok(w_len)
    }

    pub(crate) fn write_set_op(&mut self, node: &SetOp) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SetOp);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_enum(node.cmd);
        w_len += self.write_count("duplicate columns", &node.dup_col_idx)?;
        w_len += self.write_array(&node.dup_col_idx);
        w_len += self.write_scalar(node.flag_col_idx);
        Ok(w_len)
    }

    pub(crate) fn write_limit(&mut self, node: &Limit) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Limit);
        w_len += self.write_plan_info(&node.plan)?;
        w_len += self.write_child(&node.limit_offset)?;
        w_len += self.write_child(&node.limit_count)?;
        Ok(w_len)
    }

    /// The plan prefix comes last for this kind.
    pub(crate) fn write_motion(&mut self, node: &Motion) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Motion);

        w_len += self.write_scalar(node.motion_id);
        w_len += self.write_enum(node.motion_type);
        w_len += self.write_bool(node.send_sorted);

        w_len += self.write_list(node.hash_expr.as_ref())?;
        w_len += self.write_list(node.hash_data_types.as_ref())?;

        w_len += self.write_count("output segments", &node.output_seg_idx)?;
        w_len += self.write_array(&node.output_seg_idx);

        w_len += self.write_shared_count(
            "motion sort columns",
            &[node.sort_col_idx.len(), node.sort_operators.len()],
        )?;
        w_len += self.write_array(&node.sort_col_idx);
        w_len += self.write_array(&node.sort_operators);

        w_len += self.write_scalar(node.segid_col_idx);

        w_len += self.write_plan_info(&node.plan)?;
        Ok(w_len)
    }
}

/* Dispatch metadata. */
impl NodeWriter<'_> {
    pub(crate) fn write_flow(&mut self, node: &Flow) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Flow);
        w_len += self.write_enum(node.flotype);
        w_len += self.write_enum(node.req_move);
        w_len += self.write_enum(node.locustype);
        w_len += self.write_scalar(node.segindex);

        w_len += self.write_shared_count(
            "flow sort columns",
            &[node.sort_col_idx.len(), node.sort_operators.len()],
        )?;
        w_len += self.write_array(&node.sort_col_idx);
        w_len += self.write_array(&node.sort_operators);

        w_len += self.write_list(node.hash_expr.as_ref())?;
        w_len += self.write_child(&node.flow_before_req_move)?;
        Ok(w_len)
    }

    pub(crate) fn write_slice(&mut self, node: &Slice) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Slice);
        w_len += self.write_scalar(node.slice_index);
        w_len += self.write_scalar(node.root_index);
        w_len += self.write_enum(node.gang_type);
        w_len += self.write_scalar(node.gang_size);
        w_len += self.write_scalar(node.num_gang_members_to_be_active);
        w_len += self.write_bool(node.direct_dispatch.is_direct_dispatch);
        w_len += self.write_list(node.direct_dispatch.content_ids.as_ref())?;
        w_len += self.write_scalar(node.primary_gang_id);
        w_len += self.write_scalar(node.parent_index);
        w_len += self.write_list(node.children.as_ref())?;
        w_len += self.write_list(node.primary_processes.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_slice_table(&mut self, node: &SliceTable) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SliceTable);
        w_len += self.write_scalar(node.n_motions);
        w_len += self.write_scalar(node.n_init_plans);
        w_len += self.write_scalar(node.local_slice);
        w_len += self.write_list(node.slices.as_ref())?;
        w_len += self.write_bool(node.do_instrument);
        w_len += self.write_scalar(node.ic_instance_id);
        Ok(w_len)
    }
}
