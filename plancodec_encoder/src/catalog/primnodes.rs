use crate::dispatch::NodeWriter;
use crate::error::Result;
use crate::wire::WriteLen;
use plancodec_types::{
    Aggref, Alias, BoolExpr, CaseExpr, CaseWhen, Const, CurrentOfExpr, FromExpr, FuncExpr,
    IndexOptInfo, JoinExpr, NodeTag, NullTest, OpExpr, OuterJoinInfo, Param, RangeTblRef,
    RelabelType, SubLink, SubPlan, TargetEntry, TupleDescNode, Var,
};

impl NodeWriter<'_> {
    pub(crate) fn write_alias(&mut self, node: &Alias) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Alias);
        w_len += self.write_str(node.aliasname.as_deref())?;
        w_len += self.write_list(node.colnames.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_var(&mut self, node: &Var) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Var);
        w_len += self.write_scalar(node.varno);
        w_len += self.write_scalar(node.varattno);
        w_len += self.write_scalar(node.vartype);
        w_len += self.write_scalar(node.vartypmod);
        w_len += self.write_scalar(node.varlevelsup);
        w_len += self.write_scalar(node.varnoold);
        w_len += self.write_scalar(node.varoattno);
        Ok(w_len)
    }

    /// The value follows only when the constant is not null.
    pub(crate) fn write_const(&mut self, node: &Const) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Const);
        w_len += self.write_scalar(node.consttype);
        w_len += self.write_scalar(node.constlen);
        w_len += self.write_bool(node.constbyval);
        w_len += self.write_bool(node.constisnull);

        if !node.constisnull {
            w_len += self.write_datum_field(&node.constvalue, node.constlen, node.constbyval)?;
        }
        Ok(w_len)
    }

    pub(crate) fn write_param(&mut self, node: &Param) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Param);
        w_len += self.write_enum(node.paramkind);
        w_len += self.write_scalar(node.paramid);
        w_len += self.write_scalar(node.paramtype);
        Ok(w_len)
    }

    pub(crate) fn write_aggref(&mut self, node: &Aggref) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Aggref);
        w_len += self.write_scalar(node.aggfnoid);
        w_len += self.write_scalar(node.aggtype);
        w_len += self.write_list(node.args.as_ref())?;
        w_len += self.write_scalar(node.agglevelsup);
        w_len += self.write_bool(node.aggstar);
        w_len += self.write_bool(node.aggdistinct);
        w_len += self.write_enum(node.aggstage);
        w_len += self.write_child(&node.aggorder)?;
        Ok(w_len)
    }

    pub(crate) fn write_func_expr(&mut self, node: &FuncExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::FuncExpr);
        w_len += self.write_scalar(node.funcid);
        w_len += self.write_scalar(node.funcresulttype);
        w_len += self.write_bool(node.funcretset);
        w_len += self.write_enum(node.funcformat);
        w_len += self.write_list(node.args.as_ref())?;
        w_len += self.write_bool(node.is_tablefunc);
        Ok(w_len)
    }

    pub(crate) fn write_op_expr(&mut self, node: &OpExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::OpExpr);
        w_len += self.write_scalar(node.opno);
        w_len += self.write_scalar(node.opfuncid);
        w_len += self.write_scalar(node.opresulttype);
        w_len += self.write_bool(node.opretset);
        w_len += self.write_list(node.args.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_bool_expr(&mut self, node: &BoolExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::BoolExpr);
        w_len += self.write_enum(node.boolop);
        w_len += self.write_list(node.args.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_sub_link(&mut self, node: &SubLink) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SubLink);
        w_len += self.write_enum(node.sub_link_type);
        w_len += self.write_child(&node.testexpr)?;
        w_len += self.write_list(node.oper_name.as_ref())?;
        w_len += self.write_scalar(node.location);
        w_len += self.write_child(&node.subselect)?;
        Ok(w_len)
    }

    pub(crate) fn write_sub_plan(&mut self, node: &SubPlan) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SubPlan);
        w_len += self.write_enum(node.sub_link_type);
        w_len += self.write_child(&node.testexpr)?;
        w_len += self.write_list(node.param_ids.as_ref())?;
        w_len += self.write_scalar(node.plan_id);
        w_len += self.write_scalar(node.first_col_type);
        w_len += self.write_scalar(node.first_col_typmod);
        w_len += self.write_bool(node.use_hash_table);
        w_len += self.write_bool(node.unknown_eq_false);
        w_len += self.write_bool(node.is_initplan);
        w_len += self.write_bool(node.is_multirow);
        w_len += self.write_list(node.set_param.as_ref())?;
        w_len += self.write_list(node.par_param.as_ref())?;
        w_len += self.write_list(node.args.as_ref())?;
        w_len += self.write_bitmapset(node.ext_param.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_relabel_type(&mut self, node: &RelabelType) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::RelabelType);
        w_len += self.write_child(&node.arg)?;
        w_len += self.write_scalar(node.resulttype);
        w_len += self.write_scalar(node.resulttypmod);
        w_len += self.write_enum(node.relabelformat);
        Ok(w_len)
    }

    pub(crate) fn write_case_expr(&mut self, node: &CaseExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CaseExpr);
        w_len += self.write_scalar(node.casetype);
        w_len += self.write_child(&node.arg)?;
        w_len += self.write_list(node.args.as_ref())?;
        w_len += self.write_child(&node.defresult)?;
        Ok(w_len)
    }

    pub(crate) fn write_case_when(&mut self, node: &CaseWhen) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CaseWhen);
        w_len += self.write_child(&node.expr)?;
        w_len += self.write_child(&node.result)?;
        Ok(w_len)
    }

    pub(crate) fn write_null_test(&mut self, node: &NullTest) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::NullTest);
        w_len += self.write_child(&node.arg)?;
        w_len += self.write_enum(node.nulltesttype);
        Ok(w_len)
    }

    pub(crate) fn write_current_of_expr(&mut self, node: &CurrentOfExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CurrentOfExpr);
        w_len += self.write_str(node.cursor_name.as_deref())?;
        w_len += self.write_scalar(node.cvarno);
        w_len += self.write_scalar(node.target_relid);
        w_len += self.write_scalar(node.gp_segment_id);
        w_len += self.write_blob(&node.ctid);
        w_len += self.write_scalar(node.tableoid);
        Ok(w_len)
    }

    pub(crate) fn write_target_entry(&mut self, node: &TargetEntry) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::TargetEntry);
        w_len += self.write_child(&node.expr)?;
        w_len += self.write_scalar(node.resno);
        w_len += self.write_str(node.resname.as_deref())?;
        w_len += self.write_scalar(node.ressortgroupref);
        w_len += self.write_scalar(node.resorigtbl);
        w_len += self.write_scalar(node.resorigcol);
        w_len += self.write_bool(node.resjunk);
        Ok(w_len)
    }

    pub(crate) fn write_range_tbl_ref(&mut self, node: &RangeTblRef) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::RangeTblRef);
        w_len += self.write_scalar(node.rtindex);
        Ok(w_len)
    }

    pub(crate) fn write_join_expr(&mut self, node: &JoinExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::JoinExpr);
        w_len += self.write_enum(node.jointype);
        w_len += self.write_bool(node.is_natural);
        w_len += self.write_child(&node.larg)?;
        w_len += self.write_child(&node.rarg)?;
        w_len += self.write_list(node.using_clause.as_ref())?;
        w_len += self.write_child(&node.quals)?;
        w_len += self.write_child(&node.alias)?;
        w_len += self.write_scalar(node.rtindex);
        Ok(w_len)
    }

    pub(crate) fn write_from_expr(&mut self, node: &FromExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::FromExpr);
        w_len += self.write_list(node.fromlist.as_ref())?;
        w_len += self.write_child(&node.quals)?;
        Ok(w_len)
    }

    pub(crate) fn write_outer_join_info(&mut self, node: &OuterJoinInfo) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::OuterJoinInfo);
        w_len += self.write_bitmapset(node.min_lefthand.as_ref())?;
        w_len += self.write_bitmapset(node.min_righthand.as_ref())?;
        w_len += self.write_enum(node.join_type);
        w_len += self.write_bool(node.lhs_strict);
        Ok(w_len)
    }

    /// One count governs the three per-column arrays, each written whole before the next.
    pub(crate) fn write_index_opt_info(&mut self, node: &IndexOptInfo) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::IndexOptInfo);
        w_len += self.write_scalar(node.indexoid);
        w_len += self.write_scalar(node.pages);
        w_len += self.write_float(node.tuples);

        w_len += self.write_shared_count(
            "index columns",
            &[node.classlist.len(), node.indexkeys.len(), node.ordering.len()],
        )?;
        w_len += self.write_array(&node.classlist);
        w_len += self.write_array(&node.indexkeys);
        w_len += self.write_array(&node.ordering);

        w_len += self.write_scalar(node.relam);
        w_len += self.write_scalar(node.amcostestimate);
        w_len += self.write_list(node.indexprs.as_ref())?;
        w_len += self.write_list(node.indpred.as_ref())?;
        w_len += self.write_bool(node.pred_ok);
        w_len += self.write_bool(node.unique);
        w_len += self.write_bool(node.amoptionalkey);
        w_len += self.write_bool(node.cdb_default_stats_used);
        Ok(w_len)
    }

    /// Attribute descriptions go out as raw fixed-size blocks, counted by the descriptor.
    pub(crate) fn write_tuple_desc_node(&mut self, node: &TupleDescNode) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::TupleDescNode);
        w_len += self.write_scalar(node.natts);

        let desc = &node.tuple;
        w_len += self.write_count("tuple attributes", &desc.attrs)?;
        for attr in &desc.attrs {
            w_len += self.write_blob(attr);
        }

        w_len += self.write_scalar(desc.tdtypeid);
        w_len += self.write_scalar(desc.tdtypmod);
        w_len += self.write_scalar(desc.tdqdtypmod);
        w_len += self.write_bool(desc.tdhasoid);
        w_len += self.write_scalar(desc.tdrefcount);
        Ok(w_len)
    }
}
