//! Static grammar table: symbol namespace and the 94 fixed productions.
//!
//! The symbol table and production RHS lists are a direct transcription of
//! `grammarTerms[111]` (parserDef.h) and `initialize_grammar()` (parser.c):
//! every numeric symbol ID below must match those tables exactly, since the
//! parse table, FIRST/FOLLOW sets, and tree printer all index into it.

pub type SymbolId = u16;

pub const END_MARKER: SymbolId = 0;
pub const TERMINALS_START: SymbolId = 1;
pub const TERMINALS_END: SymbolId = 56;
pub const NONTERMINALS_START: SymbolId = 57;
pub const NONTERMINALS_END: SymbolId = 109;
pub const EPSILON: SymbolId = 110;
pub const TERMS_SIZE: usize = 111;

pub const START_SYMBOL: SymbolId = 57; // program

/// Names of every symbol in the single ID namespace, index == SymbolId.
pub const SYMBOL_NAMES: [&str; TERMS_SIZE] = [
    "$", "TK_MAIN", "TK_END", "TK_FUNID", "TK_SEM", "TK_INPUT", "TK_PARAMETER", "TK_LIST",
    "TK_SQL", "TK_SQR", "TK_OUTPUT", "TK_INT", "TK_REAL", "TK_RUID", "TK_COMMA", "TK_RECORD",
    "TK_ENDRECORD", "TK_UNION", "TK_ENDUNION", "TK_TYPE", "TK_COLON", "TK_FIELDID", "TK_GLOBAL",
    "TK_ASSIGNOP", "TK_WHILE", "TK_OP", "TK_CL", "TK_IF", "TK_THEN", "TK_ELSE", "TK_ENDIF",
    "TK_READ", "TK_WRITE", "TK_PLUS", "TK_MINUS", "TK_MUL", "TK_DIV", "TK_NOT", "TK_AND", "TK_OR",
    "TK_LT", "TK_LE", "TK_EQ", "TK_GT", "TK_GE", "TK_NE", "TK_RETURN", "TK_DEFINETYPE", "TK_AS",
    "TK_DOT", "TK_CALL", "TK_WITH", "TK_PARAMETERS", "TK_NUM", "TK_RNUM", "TK_ENDWHILE", "TK_ID",
    "program", "otherFunctions", "mainFunction", "function", "input_par", "output_par",
    "parameter_list", "dataType", "primitiveDataType", "constructedDataType", "remaining_list",
    "stmts", "typeDefinitions", "actualOrRedefined", "typeDefinition", "fieldDefinitions",
    "fieldDefinition", "fieldType", "moreFields", "declarations", "declaration",
    "global_or_not", "otherStmts", "stmt", "assignmentStmt", "SingleOrRecId",
    "option_single_constructed", "oneExpansion", "moreExpansions", "funCallStmt",
    "outputParameters", "inputParameters", "iterativeStmt", "conditionalStmt", "elsePart",
    "ioStmt", "arithmeticExpression", "expPrime", "term", "termPrime", "factor",
    "lowPrecedenceOp", "highPrecedenceOp", "booleanExpression", "var", "logicalOp",
    "relationalOp", "returnStmt", "optionalReturn", "idList", "more_ids", "definetypestmt", "A",
    "eps",
];

pub fn symbol_name(id: SymbolId) -> &'static str {
    SYMBOL_NAMES
        .get(id as usize)
        .copied()
        .unwrap_or("UNKNOWN_SYMBOL")
}

pub fn is_terminal(id: SymbolId) -> bool {
    (TERMINALS_START..=TERMINALS_END).contains(&id)
}

pub fn is_nonterminal(id: SymbolId) -> bool {
    (NONTERMINALS_START..=NONTERMINALS_END).contains(&id)
}

/// A single production: LHS non-terminal plus its ordered RHS symbol list.
/// An epsilon production has RHS == `[EPSILON]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    pub lhs: SymbolId,
    pub rhs: Vec<SymbolId>,
}

/// The fixed, ordered 94-production grammar.
///
/// Index into this vec is the zero-based production index used by the
/// parse table and the parse-tree's "which production expanded me" record.
pub fn productions() -> Vec<Production> {
    let raw: &[(SymbolId, &[SymbolId])] = &[
        (57, &[58, 59]),                                   // 1  program
        (59, &[1, 68, 2]),                                 // 2  mainFunction
        (58, &[60, 58]),                                   // 3  otherFunctions
        (58, &[EPSILON]),                                  // 4  otherFunctions
        (60, &[3, 61, 62, 4, 68, 2]),                       // 5  function
        (61, &[5, 6, 7, 8, 63, 9]),                         // 6  input_par
        (62, &[10, 6, 7, 8, 63, 9]),                        // 7  output_par
        (62, &[EPSILON]),                                  // 8  output_par
        (63, &[64, 56, 67]),                                // 9  parameter_list
        (64, &[65]),                                       // 10 dataType
        (64, &[66]),                                       // 11 dataType
        (65, &[11]),                                       // 12 primitiveDataType
        (65, &[12]),                                       // 13 primitiveDataType
        (66, &[109, 13]),                                   // 14 constructedDataType
        (66, &[13]),                                        // 15 constructedDataType
        (67, &[14, 63]),                                    // 16 remaining_list
        (67, &[EPSILON]),                                  // 17 remaining_list
        (68, &[69, 76, 79, 104]),                            // 18 stmts
        (69, &[70, 69]),                                    // 19 typeDefinitions
        (69, &[EPSILON]),                                  // 20 typeDefinitions
        (70, &[71]),                                        // 21 actualOrRedefined
        (70, &[108]),                                       // 22 actualOrRedefined
        (71, &[15, 13, 72, 16]),                             // 23 typeDefinition
        (71, &[17, 13, 72, 18]),                             // 24 typeDefinition
        (72, &[73, 73, 75]),                                 // 25 fieldDefinitions
        (73, &[19, 74, 20, 21, 4]),                          // 26 fieldDefinition
        (74, &[65]),                                        // 27 fieldType
        (74, &[66]),                                        // 28 fieldType
        (75, &[73, 75]),                                    // 29 moreFields
        (75, &[EPSILON]),                                  // 30 moreFields
        (76, &[77, 76]),                                    // 31 declarations
        (76, &[EPSILON]),                                  // 32 declarations
        (77, &[19, 64, 20, 56, 78, 4]),                       // 33 declaration
        (78, &[20, 22]),                                    // 34 global_or_not
        (78, &[EPSILON]),                                  // 35 global_or_not
        (79, &[80, 79]),                                    // 36 otherStmts
        (79, &[EPSILON]),                                  // 37 otherStmts
        (80, &[81]),                                        // 38 stmt
        (80, &[89]),                                        // 39 stmt
        (80, &[90]),                                        // 40 stmt
        (80, &[92]),                                        // 41 stmt
        (80, &[86]),                                        // 42 stmt
        (81, &[82, 23, 93, 4]),                               // 43 assignmentStmt
        (82, &[56, 83]),                                    // 44 SingleOrRecId
        (83, &[84, 85]),                                    // 45 option_single_constructed
        (83, &[EPSILON]),                                  // 46 option_single_constructed
        (85, &[84, 85]),                                    // 47 moreExpansions
        (85, &[EPSILON]),                                  // 48 moreExpansions
        (84, &[49, 21]),                                    // 49 oneExpansion
        (86, &[87, 50, 3, 51, 52, 88, 4]),                    // 50 funCallStmt
        (87, &[8, 106, 9, 23]),                              // 51 outputParameters
        (87, &[EPSILON]),                                  // 52 outputParameters
        (88, &[8, 106, 9]),                                  // 53 inputParameters
        (89, &[24, 25, 100, 26, 80, 79, 55]),                 // 54 iterativeStmt
        (90, &[27, 25, 100, 26, 28, 80, 79, 91]),              // 55 conditionalStmt
        (91, &[29, 80, 79, 30]),                             // 56 elsePart
        (91, &[30]),                                        // 57 elsePart
        (92, &[31, 25, 101, 26, 4]),                          // 58 ioStmt
        (92, &[32, 25, 101, 26, 4]),                          // 59 ioStmt
        (93, &[95, 94]),                                    // 60 arithmeticExpression
        (94, &[98, 95, 94]),                                 // 61 expPrime
        (94, &[EPSILON]),                                  // 62 expPrime
        (95, &[97, 96]),                                    // 63 term
        (96, &[99, 97, 96]),                                 // 64 termPrime
        (96, &[EPSILON]),                                  // 65 termPrime
        (97, &[25, 93, 26]),                                // 66 factor
        (97, &[101]),                                       // 67 factor
        (98, &[33]),                                        // 68 lowPrecedenceOp
        (98, &[34]),                                        // 69 lowPrecedenceOp
        (99, &[35]),                                        // 70 highPrecedenceOp
        (99, &[36]),                                        // 71 highPrecedenceOp
        (100, &[25, 100, 26, 102, 25, 100, 26]),               // 72 booleanExpression
        (100, &[101, 103, 101]),                             // 73 booleanExpression
        (100, &[37, 25, 100, 26]),                            // 74 booleanExpression
        (101, &[82]),                                       // 75 var
        (101, &[53]),                                       // 76 var
        (101, &[54]),                                       // 77 var
        (102, &[38]),                                       // 78 logicalOp
        (102, &[39]),                                       // 79 logicalOp
        (103, &[40]),                                       // 80 relationalOp
        (103, &[41]),                                       // 81 relationalOp
        (103, &[42]),                                       // 82 relationalOp
        (103, &[43]),                                       // 83 relationalOp
        (103, &[44]),                                       // 84 relationalOp
        (103, &[45]),                                       // 85 relationalOp
        (104, &[46, 105, 4]),                                // 86 returnStmt
        (105, &[8, 106, 9]),                                  // 87 optionalReturn
        (105, &[EPSILON]),                                  // 88 optionalReturn
        (106, &[56, 107]),                                  // 89 idList
        (107, &[14, 106]),                                  // 90 more_ids
        (107, &[EPSILON]),                                  // 91 more_ids
        (108, &[47, 109, 13, 48, 13]),                        // 92 definetypestmt
        (109, &[15]),                                       // 93 A
        (109, &[17]),                                       // 94 A
    ];
    raw.iter()
        .map(|(lhs, rhs)| Production {
            lhs: *lhs,
            rhs: rhs.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_94_productions() {
        assert_eq!(productions().len(), 94);
    }

    #[test]
    fn start_symbol_is_program() {
        assert_eq!(symbol_name(START_SYMBOL), "program");
    }

    #[test]
    fn epsilon_name_is_eps() {
        assert_eq!(symbol_name(EPSILON), "eps");
    }

    #[test]
    fn end_marker_name() {
        assert_eq!(symbol_name(END_MARKER), "$");
    }

    #[test]
    fn every_lhs_is_a_nonterminal() {
        for p in productions() {
            assert!(is_nonterminal(p.lhs), "production LHS {} not a non-terminal", p.lhs);
        }
    }

    #[test]
    fn every_rhs_symbol_is_known() {
        for p in productions() {
            for &s in &p.rhs {
                assert!(
                    s == EPSILON || is_terminal(s) || is_nonterminal(s),
                    "unknown RHS symbol {s}"
                );
            }
        }
    }

    #[test]
    fn symbol_table_has_111_entries() {
        assert_eq!(SYMBOL_NAMES.len(), TERMS_SIZE);
    }
}
