/*!
# Appendix A: Errors

A failing program stops at the first error; the report names the line
it happened on. The messages:

```text
EXPECTED ...; FOUND ...     a token out of place, with what was wanted
BAD FACTOR: ...             an expression began with something unusable
BAD STATEMENT: ...          a line began with something unusable
DELEGATE NOT SET            the host never attached its I/O bundle
UNINITIALIZED SYMBOL: ...   a variable or dictionary key read before any write
UNKNOWN LABEL: ...          a jump to a label no line carries
BAD MATH IN ...             operands an operator cannot take, or division by zero
BAD COMPARISON ...          an ordering between values that have none
INTEGER OVERFLOW IN ...     64-bit arithmetic left the range
CANNOT SUBSCRIPT            a subscript on a value that takes none
SUBSCRIPT OUT OF RANGE      a string index past the last character
BAD ARGUMENT TO ...         a built-in function given the wrong shape
RETURN WITHOUT GOSUB        the return stack was empty
NEXT WITHOUT FOR            no loop was in flight
BAD LOOP INDEX              the loop variable stopped being an integer
BAD RANGE BOUND             FOR bounds missing, non-integer, or empty
UNKNOWN SYMBOL: ...         a write into a string subscript
INTERNAL ERROR: ...         a path that should not be reachable
```

Stopping a program from outside (CTRL-C in the terminal front-end) is
not an error; the run simply ends.

*/
