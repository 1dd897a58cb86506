//! End-to-end pipeline tests over miniature header texts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use nodegen::schema;

const NODES_HEADER: &str = r#"/*-------------------------------------------------------------------------
 *
 * parsenodes.h
 *	  definitions for parse-time node types
 *
 *-------------------------------------------------------------------------
 */

typedef struct ColumnRef
{
	NodeTag		type;
	List	   *fields;			/* field names or A_Star */
	int			location;		/* token location, or -1 if unknown */
	Widget	   *w;				/* defined in neither header */
} ColumnRef;

typedef struct InsertStmt
{
	NodeTag		type;
	RangeVar   *relation;		/* relation to insert into */
	List	   *cols;			/* optional: names of the target columns */
	Node	   *selectStmt;		/* the source SELECT/VALUES, or NULL */
	CmdType		op;
} InsertStmt;

typedef struct Query
{
	NodeTag		type;
	int			resultRelation;
} Query;

typedef struct SelectStmt
{
	NodeTag		type;
	List	   *targetList;		/* the target list (of ResTarget) */
	Node	   *whereClause;	/* WHERE qualification */
	bool		all;			/* ALL specified? */
} SelectStmt;
"#;

const PRIMS_HEADER: &str = r#"/*
 * primnodes.h
 *	  definitions for "primitive" node types
 */

typedef struct RangeVar
{
	NodeTag		type;
	char	   *relname;		/* the relation/sequence name */
	bool		inh;			/* expand rel by inheritance? */
	Alias	   *alias;			/* table alias & optional column aliases */
} RangeVar;

typedef struct Alias
{
	NodeTag		type;
	char	   *aliasname;		/* aliased rel name */
	List	   *colnames;		/* optional list of column aliases */
} Alias;

typedef struct DeadPrim
{
	NodeTag		type;
	Oid			unreferenced;
} DeadPrim;
"#;

#[test]
fn test_full_pipeline_emits_banded_interface_text() {
    let resolved = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    let expected = concat!(
        "interface AllAstNodes {\n",
        "\tInsertStmt: {\n",
        "\t\trelation?: AllAstNodes['RangeVar'];\n",
        "\t\tcols?: AstNode[];\n",
        "\t\tselectStmt?: AstNode;\n",
        "\t\top?: string;\n",
        "\t}\n",
        "\tSelectStmt: {\n",
        "\t\ttargetList?: AstNode[];\n",
        "\t\twhereClause?: AstNode;\n",
        "\t\tall?: boolean;\n",
        "\t}\n",
        "\tColumnRef: {\n",
        "\t\tfields?: AstNode[];\n",
        "\t\tlocation?: number;\n",
        "\t\tw?: any;\n",
        "\t}\n",
        "\tString: {\n\t\tival?: number;\n\t\tstr?: string;\n\t}\n",
        "\tInteger: {\n\t\tival?: number;\n\t\tstr?: string;\n\t}\n",
        "\tFloat: {\n\t\tival?: number;\n\t\tstr?: string;\n\t}\n",
        "\tNull: {\n\t\tival?: number;\n\t\tstr?: string;\n\t}\n",
        "\tBitString: {\n\t\tival?: number;\n\t\tstr?: string;\n\t}\n",
        "\tRangeVar: {\n",
        "\t\trelname?: string;\n",
        "\t\tinh?: boolean;\n",
        "\t\talias?: AllAstNodes['Alias'];\n",
        "\t}\n",
        "\tAlias: {\n",
        "\t\taliasname?: string;\n",
        "\t\tcolnames?: AstNode[];\n",
        "\t}\n",
        "}",
    );
    assert_eq!(resolved.type_definitions(), expected);
}

#[test]
fn test_full_pipeline_tag_list_mirrors_interface_order() {
    let resolved = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    assert_eq!(
        resolved.tag_literals(),
        concat!(
            "[\n",
            "'InsertStmt',\n",
            "'SelectStmt',\n",
            "'ColumnRef',\n",
            "'String',\n",
            "'Integer',\n",
            "'Float',\n",
            "'Null',\n",
            "'BitString',\n",
            "'RangeVar',\n",
            "'Alias'\n",
            "]",
        )
    );
}

#[test]
fn test_query_wrapper_never_appears() {
    let resolved = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    assert!(!resolved.type_definitions().contains("Query"));
    assert!(!resolved.tag_literals().contains("Query"));
}

#[test]
fn test_unknown_declared_type_is_reported_not_fatal() {
    let resolved = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    assert_eq!(resolved.unresolved, vec!["Widget".to_string()]);
}

#[test]
fn test_unreferenced_primitive_is_dropped() {
    let resolved = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    assert!(!resolved.pulled.contains("DeadPrim"));
    assert!(!resolved.tag_literals().contains("DeadPrim"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    let second = schema::generate(NODES_HEADER, PRIMS_HEADER).unwrap();
    assert_eq!(first.type_definitions(), second.type_definitions());
    assert_eq!(first.tag_literals(), second.tag_literals());
}

#[test]
fn test_missing_close_marker_aborts_run() {
    let truncated = "typedef struct Foo\n{\n\tint x;\n";
    let err = schema::generate(truncated, PRIMS_HEADER).unwrap_err();
    assert!(err.contains("Foo"), "error should name the struct: {err}");
}
