/*!
# `RETURN`

## Purpose
Come back from a [`GOSUB`](super::GOSUB).

## Remarks
Execution resumes on the line after the most recent `GOSUB` still
outstanding. A `RETURN` with nothing on the return stack is an error.

## Example
```text
gosub Twice
gosub Twice
end
Twice
print "again"
return
```

*/
